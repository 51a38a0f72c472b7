//! Quiz generation pipeline: topic → prompt → completion → parser.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, Sampling};
use crate::quiz::model::{QuizQuestion, QUIZ_SIZE};
use crate::quiz::parser::parse_quiz_text;
use crate::quiz::prompts::{build_quiz_prompt, QUIZ_SYSTEM};

/// Asks the model for a quiz on `topic` and returns the questions that survive parsing,
/// capped at `QUIZ_SIZE`. An empty vector is a valid result; completion failures are not
/// masked.
pub async fn generate_quiz(
    topic: &str,
    llm: &dyn CompletionProvider,
) -> Result<Vec<QuizQuestion>, AppError> {
    let prompt = build_quiz_prompt(topic);

    let raw_quiz = llm
        .complete(QUIZ_SYSTEM, &prompt, Sampling::QUIZ)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    debug!("Raw quiz output:\n{raw_quiz}");

    let mut questions = parse_quiz_text(&raw_quiz);

    for question in &questions {
        debug!(
            question = question.question(),
            options = ?question.options(),
            answer = question.correct_answer(),
            "Accepted quiz question"
        );
    }

    if questions.len() > QUIZ_SIZE {
        debug!(
            "Model returned {} questions, keeping the first {QUIZ_SIZE}",
            questions.len()
        );
        questions.truncate(QUIZ_SIZE);
    }

    if questions.is_empty() {
        warn!(topic, "Model reply contained no valid quiz questions");
    } else {
        info!(topic, count = questions.len(), "Quiz generated");
    }

    Ok(questions)
}
