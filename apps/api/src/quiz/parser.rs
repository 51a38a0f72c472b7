//! Quiz text parser — turns a model reply laid out per `prompts::QUIZ_PROMPT_TEMPLATE`
//! into validated `QuizQuestion`s.
//!
//! Two phases per block:
//! 1. Tolerant extraction: each field is pulled out independently and a missing field
//!    becomes an empty string (or no answer letter).
//! 2. Validation gate: `QuizQuestion::new` accepts the block whole or rejects it.
//!
//! A rejected block is logged and skipped; it never affects its siblings.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::quiz::model::{BlockError, OptionLabel, QuizQuestion};
use crate::quiz::prompts::{ANSWER_MARKER, QUESTION_MARKER};

static BLOCK_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s*", regex::escape(QUESTION_MARKER)))
        .expect("invalid block marker regex")
});

/// One pattern per label, indexed by `OptionLabel::index`. Matches a whole line
/// `<label>) <text>`, allowing leading indentation.
static OPTION_LINES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    OptionLabel::ALL.map(|label| {
        Regex::new(&format!(r"(?m)^[ \t]*{}\)[ \t]*(.*)$", label.letter()))
            .expect("invalid option line regex")
    })
});

static ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s*([A-D])", regex::escape(ANSWER_MARKER)))
        .expect("invalid answer line regex")
});

/// Fields pulled out of one block before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExtractedBlock<'a> {
    stem: &'a str,
    options: [&'a str; 4],
    answer_letter: Option<char>,
}

impl ExtractedBlock<'_> {
    fn validate(&self) -> Result<QuizQuestion, BlockError> {
        let answer = resolve_answer(self.answer_letter)?;
        QuizQuestion::new(self.stem, self.options, answer)
    }
}

/// Parses a raw model reply into the questions that pass validation, in order of
/// appearance. Never fails: unparseable input yields an empty vector.
pub fn parse_quiz_text(raw: &str) -> Vec<QuizQuestion> {
    let questions: Vec<QuizQuestion> = split_blocks(raw)
        .enumerate()
        .filter_map(|(index, block)| match extract_block(block).validate() {
            Ok(question) => Some(question),
            Err(reason) => {
                warn!(block = index + 1, %reason, "Dropping malformed quiz block");
                None
            }
        })
        .collect();

    debug!("Parsed {} quiz question(s)", questions.len());
    questions
}

/// Splits on the question marker; text before the first marker is discarded.
fn split_blocks(raw: &str) -> impl Iterator<Item = &str> + '_ {
    BLOCK_SPLIT.split(raw.trim()).skip(1)
}

fn extract_block(block: &str) -> ExtractedBlock<'_> {
    let (stem, body) = extract_stem(block);
    ExtractedBlock {
        stem,
        options: OptionLabel::ALL.map(|label| extract_option(body, label)),
        answer_letter: extract_answer_letter(block),
    }
}

/// Returns the stem (everything before the first `A)` line) and the remainder of the
/// block starting at that line. Without an `A)` line the stem is empty.
fn extract_stem(block: &str) -> (&str, &str) {
    match OPTION_LINES[OptionLabel::A.index()].find(block) {
        Some(first_option) => (
            block[..first_option.start()].trim(),
            &block[first_option.start()..],
        ),
        None => ("", block),
    }
}

fn extract_option(body: &str, label: OptionLabel) -> &str {
    OPTION_LINES[label.index()]
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map_or("", |text| text.as_str().trim())
}

fn extract_answer_letter(block: &str) -> Option<char> {
    ANSWER_LINE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .and_then(|letter| letter.as_str().chars().next())
}

/// No stated letter falls back to option A; a letter outside A-D rejects the block.
fn resolve_answer(letter: Option<char>) -> Result<OptionLabel, BlockError> {
    match letter {
        None => Ok(OptionLabel::A),
        Some(letter) => {
            OptionLabel::from_letter(letter).ok_or(BlockError::AnswerOutOfRange(letter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUESTIONS: &str = "Question: What is 2+2?
A) 3
B) 4
C) 5
D) 6
Correct Answer: B

Question: Capital of France?
A) Rome
B) Berlin
C) Paris
D) Madrid
";

    fn assert_invariants(question: &QuizQuestion) {
        assert!(!question.question().trim().is_empty());
        assert_eq!(question.options().len(), 4);
        assert!(question.options().iter().all(|o| !o.trim().is_empty()));
        assert!(question
            .options()
            .iter()
            .any(|o| o == question.correct_answer()));
    }

    #[test]
    fn test_two_question_scenario() {
        let quiz = parse_quiz_text(TWO_QUESTIONS);
        assert_eq!(quiz.len(), 2);

        assert_eq!(quiz[0].question(), "What is 2+2?");
        assert_eq!(quiz[0].options(), &["3", "4", "5", "6"].map(String::from));
        assert_eq!(quiz[0].correct_answer(), "4");

        assert_eq!(quiz[1].question(), "Capital of France?");
        assert_eq!(
            quiz[1].options(),
            &["Rome", "Berlin", "Paris", "Madrid"].map(String::from)
        );
        assert_eq!(quiz[1].correct_answer(), "Rome");
    }

    #[test]
    fn test_block_missing_option_is_dropped_without_aborting() {
        let raw = "Question: Broken one?
A) alpha
B) beta
D) delta
Correct Answer: D

Question: Which is a Rust smart pointer?
A) Box
B) malloc
C) shared_ptr
D) unique_ptr
Correct Answer: A";
        let quiz = parse_quiz_text(raw);
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].question(), "Which is a Rust smart pointer?");
        assert_eq!(quiz[0].correct_answer(), "Box");
    }

    #[test]
    fn test_missing_answer_line_defaults_to_option_a() {
        let raw = "Question: Largest planet?\nA) Jupiter\nB) Mars\nC) Venus\nD) Earth\n";
        let quiz = parse_quiz_text(raw);
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].correct_answer(), "Jupiter");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(parse_quiz_text(TWO_QUESTIONS), parse_quiz_text(TWO_QUESTIONS));
    }

    #[test]
    fn test_empty_and_markerless_input_yield_nothing() {
        assert!(parse_quiz_text("").is_empty());
        assert!(parse_quiz_text("   \n\n").is_empty());
        assert!(parse_quiz_text("Sorry, I cannot help with that topic.").is_empty());
        assert!(parse_quiz_text("question: lower case marker\nA) a\nB) b\nC) c\nD) d").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let raw: String = (1..=10)
            .map(|n| {
                format!(
                    "Question: Q{n}?\nA) a{n}\nB) b{n}\nC) c{n}\nD) d{n}\nCorrect Answer: C\n\n"
                )
            })
            .collect();
        let quiz = parse_quiz_text(&raw);
        assert_eq!(quiz.len(), 10);
        for (i, question) in quiz.iter().enumerate() {
            assert_eq!(question.question(), format!("Q{}?", i + 1));
            assert_eq!(question.correct_answer(), format!("c{}", i + 1));
        }
    }

    #[test]
    fn test_leading_prose_is_discarded() {
        let raw = format!("Sure! Here are your questions on arithmetic:\n\n{TWO_QUESTIONS}");
        let quiz = parse_quiz_text(&raw);
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].question(), "What is 2+2?");
    }

    #[test]
    fn test_tolerates_spacing_drift_and_crlf() {
        let raw = "Question:What is HTTP?\r\n  A)  A protocol \r\n  B)A language\r\n  C) A database\r\n  D) An editor\r\nCorrect Answer:   A\r\n";
        let quiz = parse_quiz_text(raw);
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].question(), "What is HTTP?");
        assert_eq!(
            quiz[0].options(),
            &["A protocol", "A language", "A database", "An editor"].map(String::from)
        );
    }

    #[test]
    fn test_multiline_stem_is_kept_whole() {
        let raw = "Question: What does this print?\nlet x = 5;\nprintln!(\"{x}\");\nA) 5\nB) x\nC) nothing\nD) error\nCorrect Answer: A";
        let quiz = parse_quiz_text(raw);
        assert_eq!(quiz.len(), 1);
        assert_eq!(
            quiz[0].question(),
            "What does this print?\nlet x = 5;\nprintln!(\"{x}\");"
        );
    }

    #[test]
    fn test_answer_line_with_option_text_resolves_letter() {
        let raw = "Question: Pick two\nA) 1\nB) 2\nC) 3\nD) 4\nCorrect Answer: B) 2";
        assert_eq!(parse_quiz_text(raw)[0].correct_answer(), "2");
    }

    #[test]
    fn test_answer_letter_read_even_when_followed_by_text() {
        for (answer_line, expected) in [
            ("Correct Answer: B2", "y"),
            ("Correct Answer: Bx", "y"),
            ("Correct Answer: C_", "z"),
            ("Correct Answer: Berlin", "y"),
        ] {
            let raw = format!("Question: Pick one\nA) x\nB) y\nC) z\nD) w\n{answer_line}");
            let quiz = parse_quiz_text(&raw);
            assert_eq!(quiz.len(), 1, "{answer_line}");
            assert_eq!(quiz[0].correct_answer(), expected, "{answer_line}");
        }
    }

    #[test]
    fn test_label_with_empty_text_fails_gate() {
        let raw = "Question: Blank C?\nA) one\nB) two\nC)\nD) four\nCorrect Answer: A";
        assert!(parse_quiz_text(raw).is_empty());
    }

    #[test]
    fn test_block_without_a_line_has_empty_stem() {
        let block = "No options here\nB) two\nC) three\nD) four";
        let extracted = extract_block(block);
        assert_eq!(extracted.stem, "");
        assert_eq!(extracted.validate(), Err(BlockError::MissingStem));
    }

    #[test]
    fn test_marker_with_no_stem_is_dropped() {
        let raw = "Question:\nA) a\nB) b\nC) c\nD) d\nCorrect Answer: A";
        assert!(parse_quiz_text(raw).is_empty());
    }

    #[test]
    fn test_extract_block_fields() {
        let block = "Stem text\nA) one\nB) two\nC) three\nCorrect Answer: C\n";
        assert_eq!(
            extract_block(block),
            ExtractedBlock {
                stem: "Stem text",
                options: ["one", "two", "three", ""],
                answer_letter: Some('C'),
            }
        );
    }

    #[test]
    fn test_resolve_answer_policy() {
        assert_eq!(resolve_answer(None), Ok(OptionLabel::A));
        assert_eq!(resolve_answer(Some('D')), Ok(OptionLabel::D));
        assert_eq!(
            resolve_answer(Some('E')),
            Err(BlockError::AnswerOutOfRange('E'))
        );
    }

    #[test]
    fn test_every_emitted_question_satisfies_invariants() {
        let raw = format!(
            "Intro text\n{TWO_QUESTIONS}\nQuestion: \nA) x\nB) y\nC) z\nD) w\n\
             Question: Half\nA) only one\n\
             Question: Last?\n A) l1\n B) l2\n C) l3\n D) l4\nCorrect Answer: D\nThanks!"
        );
        let quiz = parse_quiz_text(&raw);
        assert_eq!(quiz.len(), 3);
        quiz.iter().for_each(assert_invariants);
        assert_eq!(quiz[2].correct_answer(), "l4");
    }
}
