// Prompt constants for career roadmap generation.

pub const ROADMAP_SYSTEM: &str = "You are a career advisor.";

/// Roadmap prompt template. Replace `{role}` before sending.
const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed career roadmap for becoming a {role}.
Include:
1. Skills to learn (in stages)
2. Tools & technologies to master
3. Projects to build
4. Suggested certifications or courses
5. Time-based breakdown (e.g., Month 1–3, Month 4–6, etc.)"#;

pub fn build_roadmap_prompt(role: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE.replace("{role}", role.trim())
}
