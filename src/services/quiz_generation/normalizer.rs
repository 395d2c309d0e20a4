//! Repairs loosely structured quiz JSON from a language model into
//! questions that all carry exactly four options.
//!
//! The parser is permissive on purpose: missing fields get defaults,
//! answers given as option text are mapped back to letters, and option
//! lists are padded or cut. Only the four-option rule is enforced.

use serde_json::{Map, Value};

use crate::errors::{QuizError, QuizResult};
use crate::models::domain::question::{
    answer_letter, letter_index, Question, QuestionKind, OPTION_COUNT, TRUE_FALSE_OPTIONS,
};

const MIN_QUESTION_LENGTH: usize = 5;
const DEFAULT_TITLE: &str = "Generated Quiz";
const MC_PLACEHOLDER: &str = "—";
const TEXT_FIELDS: [&str; 3] = ["question", "prompt", "stem"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedQuiz {
    pub title: String,
    pub questions: Vec<Question>,
}

pub fn normalize_quiz(raw: &Value, kind: QuestionKind) -> QuizResult<NormalizedQuiz> {
    let object = raw
        .as_object()
        .ok_or_else(|| QuizError::InvalidQuizShape("expected a JSON object".to_string()))?;

    let candidates = object
        .get("questions")
        .and_then(Value::as_array)
        .ok_or_else(|| QuizError::InvalidQuizShape("missing questions array".to_string()))?;

    let questions: Vec<Question> = candidates
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|candidate| repair_question(candidate, kind))
        .filter(|q| !q.text.is_empty() && q.options.len() == OPTION_COUNT)
        .collect();

    log::debug!(
        "normalized {} of {} {} candidates",
        questions.len(),
        candidates.len(),
        kind
    );

    if questions.is_empty() {
        return Err(QuizError::NoValidQuestions);
    }

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    Ok(NormalizedQuiz { title, questions })
}

fn repair_question(candidate: &Map<String, Value>, kind: QuestionKind) -> Option<Question> {
    let text = TEXT_FIELDS
        .iter()
        .filter_map(|field| candidate.get(*field).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .trim()
        .to_string();

    if text.chars().count() < MIN_QUESTION_LENGTH {
        return None;
    }

    let raw_answer = raw_answer(candidate);
    let explanation = candidate
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let (options, correct_answer) = match kind {
        QuestionKind::TrueFalse => (
            TRUE_FALSE_OPTIONS.iter().map(|o| o.to_string()).collect::<Vec<_>>(),
            normalize_true_false(&raw_answer),
        ),
        QuestionKind::FillBlank => fill_blank_options(candidate, raw_answer),
        QuestionKind::MultipleChoice => {
            let options = multiple_choice_options(candidate);
            let answer = resolve_choice_letter(&raw_answer, &options);
            (options, answer)
        }
    };

    Some(Question {
        text,
        kind,
        options,
        correct_answer,
        explanation,
    })
}

/// `correctAnswer`, falling back to `answer` when it is missing or blank.
/// Non-string scalars keep their JSON spelling so `true` and `2` survive.
fn raw_answer(candidate: &Map<String, Value>) -> String {
    ["correctAnswer", "answer"]
        .iter()
        .filter_map(|field| candidate.get(*field))
        .map(scalar_to_string)
        .find(|answer| !answer.trim().is_empty())
        .unwrap_or_default()
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(scalar_to_string).collect())
        .unwrap_or_default()
}

// Unknown values pass through untouched so bad generations stay visible.
fn normalize_true_false(raw: &str) -> String {
    match raw.trim().to_lowercase().as_str() {
        "true" | "t" => "True".to_string(),
        "false" | "f" => "False".to_string(),
        _ => raw.to_string(),
    }
}

fn fill_blank_options(candidate: &Map<String, Value>, raw_answer: String) -> (Vec<String>, String) {
    let mut options = string_list(candidate.get("options"));
    while options.len() < OPTION_COUNT {
        options.push(format!("Option {}", options.len() + 1));
    }

    let answer = if raw_answer.is_empty() {
        options[0].clone()
    } else {
        raw_answer
    };
    (options, answer)
}

fn multiple_choice_options(candidate: &Map<String, Value>) -> Vec<String> {
    let mut options = string_list(candidate.get("options"));
    if options.len() < OPTION_COUNT {
        if let Some(choices) = candidate.get("choices").filter(|v| v.is_array()) {
            options = string_list(Some(choices));
        }
    }

    options.resize(OPTION_COUNT, MC_PLACEHOLDER.to_string());
    options
}

/// Letter resolution, in order: a bare letter, an exact case-insensitive
/// option match, a substring match in either direction, then "A".
///
/// The substring tier can land on the wrong option when distractors share
/// text ("Paris" vs "Paris, France").
pub fn resolve_choice_letter(raw: &str, options: &[String]) -> String {
    let answer = raw.trim();
    if let Some(index) = letter_index(answer) {
        return answer_letter(index);
    }
    if answer.is_empty() {
        return answer_letter(0);
    }

    let needle = answer.to_lowercase();
    let lowered: Vec<String> = options.iter().map(|o| o.trim().to_lowercase()).collect();

    if let Some(index) = lowered.iter().position(|o| *o == needle) {
        return answer_letter(index);
    }

    lowered
        .iter()
        .position(|o| !o.is_empty() && (o.contains(&needle) || needle.contains(o.as_str())))
        .map(answer_letter)
        .unwrap_or_else(|| answer_letter(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_answer_text_to_letter() {
        let raw = json!({
            "questions": [{
                "question": "What is the capital of France?",
                "options": ["Paris", "Lyon", "Nice", "Dijon"],
                "correctAnswer": "Paris"
            }]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::MultipleChoice).expect("quiz should normalize");

        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_answer, "A");
        assert_eq!(quiz.questions[0].options.len(), 4);
        assert_eq!(quiz.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_true_false_forces_fixed_options() {
        let raw = json!({
            "title": "Plants",
            "questions": [{ "question": "Photosynthesis occurs in plants.", "correctAnswer": "true" }]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::TrueFalse).expect("quiz should normalize");
        let question = &quiz.questions[0];

        assert_eq!(question.options, TRUE_FALSE_OPTIONS.to_vec());
        assert_eq!(question.correct_answer, "True");
        assert_eq!(quiz.title, "Plants");
    }

    #[test]
    fn test_true_false_accepts_letters_and_booleans() {
        let raw = json!({
            "questions": [
                { "question": "Water boils at 100C.", "answer": "T" },
                { "question": "The sun orbits the earth.", "correctAnswer": false },
                { "question": "Mitochondria store DNA.", "correctAnswer": "Maybe" }
            ]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::TrueFalse).expect("quiz should normalize");
        let answers: Vec<&str> = quiz.questions.iter().map(|q| q.correct_answer.as_str()).collect();

        assert_eq!(answers, vec!["True", "False", "Maybe"]);
    }

    #[test]
    fn test_short_questions_are_dropped() {
        let raw = json!({
            "questions": [
                { "question": "Why?", "options": ["a", "b", "c", "d"] },
                { "prompt": "  Hm  ", "options": ["a", "b", "c", "d"] }
            ]
        });

        let result = normalize_quiz(&raw, QuestionKind::MultipleChoice);
        assert_eq!(result, Err(QuizError::NoValidQuestions));
    }

    #[test]
    fn test_rejects_non_objects_and_missing_questions() {
        assert!(matches!(
            normalize_quiz(&json!([1, 2, 3]), QuestionKind::MultipleChoice),
            Err(QuizError::InvalidQuizShape(_))
        ));
        assert!(matches!(
            normalize_quiz(&json!({ "questions": "none" }), QuestionKind::MultipleChoice),
            Err(QuizError::InvalidQuizShape(_))
        ));
    }

    #[test]
    fn test_text_comes_from_prompt_or_stem() {
        let raw = json!({
            "questions": [
                { "stem": "  Which organelle makes ATP?  ", "choices": ["Mitochondria", "Nucleus", "Ribosome", "Golgi"], "answer": "b" }
            ]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::MultipleChoice).expect("quiz should normalize");
        let question = &quiz.questions[0];

        assert_eq!(question.text, "Which organelle makes ATP?");
        assert_eq!(question.options[0], "Mitochondria");
        assert_eq!(question.correct_answer, "B");
    }

    #[test]
    fn test_multiple_choice_pads_and_truncates() {
        let raw = json!({
            "questions": [
                { "question": "Pick the prime number.", "options": ["2", "4"], "correctAnswer": "2" },
                { "question": "Pick the even number.", "options": ["1", "3", "5", "8", "9"], "correctAnswer": "8" }
            ]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::MultipleChoice).expect("quiz should normalize");

        assert_eq!(quiz.questions[0].options, vec!["2", "4", "—", "—"]);
        assert_eq!(quiz.questions[0].correct_answer, "A");
        assert_eq!(quiz.questions[1].options, vec!["1", "3", "5", "8"]);
        assert_eq!(quiz.questions[1].correct_answer, "D");
    }

    #[test]
    fn test_substring_match_resolves_partial_answers() {
        let options: Vec<String> = ["Lyon", "Paris, France", "Nice", "Dijon"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(resolve_choice_letter("paris", &options), "B");
        assert_eq!(resolve_choice_letter("The city of Nice", &options), "C");
        assert_eq!(resolve_choice_letter("Berlin", &options), "A");
        assert_eq!(resolve_choice_letter("", &options), "A");
    }

    #[test]
    fn test_fill_blank_pads_with_numbered_placeholders() {
        let raw = json!({
            "questions": [{ "question": "The powerhouse of the cell is the ____.", "options": ["mitochondria"] }]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::FillBlank).expect("quiz should normalize");
        let question = &quiz.questions[0];

        assert_eq!(question.options, vec!["mitochondria", "Option 2", "Option 3", "Option 4"]);
        assert_eq!(question.correct_answer, "mitochondria");
        assert_eq!(question.kind, QuestionKind::FillBlank);
    }

    #[test]
    fn test_fill_blank_with_too_many_options_is_filtered() {
        let raw = json!({
            "questions": [
                { "question": "Water freezes at ____ degrees.", "options": ["0", "10", "20", "30", "40"], "answer": "0" },
                { "question": "Water boils at ____ degrees.", "options": ["100", "90", "80", "70"], "answer": "100" }
            ]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::FillBlank).expect("quiz should normalize");

        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_answer, "100");
    }

    #[test]
    fn test_blank_correct_answer_falls_back_to_answer() {
        let raw = json!({
            "questions": [{
                "question": "Which organelle makes ATP?",
                "options": ["ribosome", "mitochondria", "nucleus", "golgi"],
                "correctAnswer": "",
                "answer": "mitochondria"
            }]
        });
        let tf_raw = json!({
            "questions": [{ "question": "Mitochondria make ATP.", "correctAnswer": "  ", "answer": "true" }]
        });

        let fill = normalize_quiz(&raw, QuestionKind::FillBlank).expect("quiz should normalize");
        let mcq = normalize_quiz(&raw, QuestionKind::MultipleChoice).expect("quiz should normalize");
        let tf = normalize_quiz(&tf_raw, QuestionKind::TrueFalse).expect("quiz should normalize");

        assert_eq!(fill.questions[0].correct_answer, "mitochondria");
        assert_eq!(mcq.questions[0].correct_answer, "B");
        assert_eq!(tf.questions[0].correct_answer, "True");
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let raw = json!({
            "questions": ["just a string", { "question": "Name the largest planet.", "options": ["Jupiter", "Mars", "Venus", "Earth"], "correctAnswer": "A", "explanation": "It is a gas giant." }]
        });

        let quiz = normalize_quiz(&raw, QuestionKind::MultipleChoice).expect("quiz should normalize");

        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].explanation, "It is a gas giant.");
    }
}
