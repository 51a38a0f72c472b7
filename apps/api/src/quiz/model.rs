use serde::Serialize;
use thiserror::Error;

/// Number of questions a quiz request asks the model for.
pub const QUIZ_SIZE: usize = 10;

/// Positional label of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(OptionLabel::A),
            'B' => Some(OptionLabel::B),
            'C' => Some(OptionLabel::C),
            'D' => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            OptionLabel::A => 'A',
            OptionLabel::B => 'B',
            OptionLabel::C => 'C',
            OptionLabel::D => 'D',
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Why a candidate block was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("question text is empty")]
    MissingStem,

    #[error("option {} is missing or empty", .0.letter())]
    MissingOption(OptionLabel),

    #[error("correct answer letter '{0}' is not one of A-D")]
    AnswerOutOfRange(char),
}

/// A validated multiple-choice question. Fields are private so every instance
/// has passed `QuizQuestion::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    question: String,
    options: [String; 4],
    correct_answer: String,
}

impl QuizQuestion {
    /// Trims every field and rejects empty ones. The correct answer is copied
    /// from `options` by label, so it is always one of them.
    pub fn new(
        question: &str,
        options: [&str; 4],
        answer: OptionLabel,
    ) -> Result<Self, BlockError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(BlockError::MissingStem);
        }

        let options = options.map(str::trim);
        if let Some(label) = OptionLabel::ALL
            .into_iter()
            .find(|label| options[label.index()].is_empty())
        {
            return Err(BlockError::MissingOption(label));
        }

        Ok(Self {
            question: question.to_string(),
            correct_answer: options[answer.index()].to_string(),
            options: options.map(str::to_string),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}
