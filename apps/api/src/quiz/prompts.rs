// Prompt constants for quiz generation.
// The layout markers below are shared with `parser`; change them together.

use crate::quiz::model::QUIZ_SIZE;

/// Label that opens every question block.
pub const QUESTION_MARKER: &str = "Question:";

/// Label of the line carrying the correct option letter.
pub const ANSWER_MARKER: &str = "Correct Answer:";

pub const QUIZ_SYSTEM: &str = "You are a quiz master.";

/// Quiz prompt template. Replace `{count}`, `{topic}`, `{question_marker}` and
/// `{answer_marker}` before sending.
const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate exactly {count} multiple-choice questions (MCQs) for the topic: {topic}.
Each question should have 4 options (A, B, C, D) and the correct answer must be specified.

Format:
{question_marker} <Question text>
A) <Option 1>
B) <Option 2>
C) <Option 3>
D) <Option 4>
{answer_marker} <Correct option (A/B/C/D)>"#;

/// Builds the user prompt asking for a quiz on `topic` in the layout the parser expects.
pub fn build_quiz_prompt(topic: &str) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace("{count}", &QUIZ_SIZE.to_string())
        .replace("{question_marker}", QUESTION_MARKER)
        .replace("{answer_marker}", ANSWER_MARKER)
        .replace("{topic}", topic.trim())
}
