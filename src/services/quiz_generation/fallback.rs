//! Content-derived quiz used when model output cannot be salvaged.
//!
//! Questions are anchored to sentences from the source text but are easy on
//! purpose: the first option is always the correct one. A weak quiz beats
//! no quiz.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::question::{Question, QuestionKind};
use crate::services::quiz_generation::normalizer::NormalizedQuiz;
use crate::services::quiz_generation::rng::RandomSource;

const FALLBACK_TITLE: &str = "Study Notes Review";
const MIN_FRAGMENT_LENGTH: usize = 20;
const MAX_FRAGMENT_LENGTH: usize = 200;
const MIN_TERM_LENGTH: usize = 3;
const CANDIDATES_PER_QUESTION: usize = 3;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_END is a valid regex pattern"));

pub fn fallback_quiz(
    content: &str,
    question_count: usize,
    rng: &mut impl RandomSource,
) -> NormalizedQuiz {
    let fragments: Vec<&str> = SENTENCE_END
        .split(content)
        .map(str::trim)
        .filter(|f| {
            let len = f.chars().count();
            len > MIN_FRAGMENT_LENGTH && len < MAX_FRAGMENT_LENGTH
        })
        .take(question_count.saturating_mul(CANDIDATES_PER_QUESTION))
        .collect();

    let mut questions: Vec<Question> = fragments
        .iter()
        .take(question_count)
        .map(|fragment| content_question(fragment, rng))
        .collect();

    log::debug!(
        "fallback quiz built {} content questions from {} fragments",
        questions.len(),
        fragments.len()
    );

    while questions.len() < question_count {
        questions.push(generic_question());
    }

    NormalizedQuiz {
        title: FALLBACK_TITLE.to_string(),
        questions,
    }
}

fn content_question(fragment: &str, rng: &mut impl RandomSource) -> Question {
    let term = key_term(fragment, rng);

    Question {
        text: format!(
            "Which statement about \"{}\" is supported by your notes?",
            term
        ),
        kind: QuestionKind::MultipleChoice,
        options: vec![
            fragment.to_string(),
            format!("The notes describe {} as unrelated to the topic.", term),
            format!("The notes never mention {}.", term),
            format!("The notes say {} is a minor exception with no significance.", term),
        ],
        correct_answer: "A".to_string(),
        explanation: format!("Your notes state: \"{}\".", fragment),
    }
}

/// A random word longer than three characters, or the first word when the
/// fragment has none.
fn key_term(fragment: &str, rng: &mut impl RandomSource) -> String {
    let words: Vec<&str> = fragment
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() > MIN_TERM_LENGTH)
        .collect();

    if words.is_empty() {
        return fragment
            .split_whitespace()
            .next()
            .unwrap_or(fragment)
            .to_string();
    }

    let index = ((rng.next_f64() * words.len() as f64).floor() as usize).min(words.len() - 1);
    words[index].to_string()
}

fn generic_question() -> Question {
    Question {
        text: "What is the main purpose of reviewing these study notes?".to_string(),
        kind: QuestionKind::MultipleChoice,
        options: vec![
            "To understand and remember the key concepts".to_string(),
            "To memorize unrelated facts".to_string(),
            "To skip the important sections".to_string(),
            "None of the above".to_string(),
        ],
        correct_answer: "A".to_string(),
        explanation: "Reviewing notes reinforces the key concepts they cover.".to_string(),
    }
}
