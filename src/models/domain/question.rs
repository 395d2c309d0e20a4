use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const TRUE_FALSE_OPTIONS: [&str; 4] = ["True", "False", "Not specified in notes", "Partially true"];
pub const OPTION_COUNT: usize = 4;

/// A normalized question. `validate` checks the shape the normalizer
/// guarantees, for questions that arrive from elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_question_shape"))]
pub struct Question {
    #[serde(alias = "question")]
    pub text: String,
    #[serde(alias = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy)]
pub enum QuestionKind {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "true-false")]
    TrueFalse,
    // "identification" is bucketed with fill-blank everywhere
    #[serde(rename = "fill-blank", alias = "identification")]
    FillBlank,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::TrueFalse => "true-false",
            QuestionKind::FillBlank => "fill-blank",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// True-false questions may arrive without options; hybrid composition
// fills in the two-choice tuple for those.
fn validate_question_shape(question: &Question) -> Result<(), ValidationError> {
    if question.text.trim().is_empty() {
        return Err(ValidationError::new("empty_question_text"));
    }

    let bare_true_false = question.kind == QuestionKind::TrueFalse && question.options.is_empty();
    if !bare_true_false && question.options.len() != OPTION_COUNT {
        return Err(ValidationError::new("option_count"));
    }

    if question.kind == QuestionKind::MultipleChoice && letter_index(&question.correct_answer).is_none() {
        return Err(ValidationError::new("answer_letter"));
    }

    Ok(())
}

/// Maps a loosely spelled quiz type to a kind. Unknown values are treated
/// as multiple-choice.
pub fn parse_question_kind(value: &str) -> QuestionKind {
    match value.trim().to_lowercase().as_str() {
        "multiple-choice" | "multiple_choice" | "mcq" => QuestionKind::MultipleChoice,
        "true-false" | "true_false" | "truefalse" | "tf" | "boolean" => QuestionKind::TrueFalse,
        "fill-blank" | "fill_blank" | "fill" | "identification" => QuestionKind::FillBlank,
        _ => QuestionKind::MultipleChoice,
    }
}

/// Letter for a zero-based option index (0 => "A").
pub fn answer_letter(index: usize) -> String {
    char::from(b'A' + (index as u8 % 26)).to_string()
}

/// Zero-based option index for a letter A-D, if it is one.
pub fn letter_index(letter: &str) -> Option<usize> {
    match letter.trim() {
        "A" | "a" => Some(0),
        "B" | "b" => Some(1),
        "C" | "c" => Some(2),
        "D" | "d" => Some(3),
        _ => None,
    }
}
