//! Hybrid quiz composition from a pool of normalized questions.
//!
//! Every random draw comes from one Mulberry32 stream in a fixed order
//! (per-kind sampling, top-up, option shuffles, question shuffle), so a seed
//! and the two shuffle flags fully determine the result.
//!
//! When a kind runs short the total count wins over the requested mix: the
//! gap is filled from whatever is left in the pool, regardless of kind.

use std::collections::HashSet;

use crate::models::domain::question::{answer_letter, letter_index, Question, QuestionKind};
use crate::models::domain::quiz::{HybridConfig, HybridCounts, Quiz, QuizKind};
use crate::services::quiz_generation::rng::{random_seed, DeterministicRng, Seed};
use crate::services::quiz_generation::sampling::{sample, shuffle};

pub const DEFAULT_HYBRID_TITLE: &str = "Hybrid Quiz";
pub const DEFAULT_SUBJECT: &str = "General";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HybridOptions {
    pub seed: Option<Seed>,
    pub shuffle_questions: bool,
    pub shuffle_options: bool,
    pub title: Option<String>,
    pub subject: Option<String>,
}

pub fn compose_hybrid(pool: Vec<Question>, counts: HybridCounts, options: HybridOptions) -> Quiz {
    let seed = options
        .seed
        .as_ref()
        .map(Seed::resolve)
        .unwrap_or_else(random_seed);
    let mut rng = DeterministicRng::new(seed);

    let bucket = |kind: QuestionKind| -> Vec<usize> {
        pool.iter()
            .enumerate()
            .filter(|(_, q)| q.kind == kind)
            .map(|(index, _)| index)
            .collect()
    };

    let mut picked: Vec<usize> = Vec::with_capacity(counts.total().min(pool.len()));
    picked.extend(sample(&bucket(QuestionKind::MultipleChoice), counts.mcq, &mut rng));
    picked.extend(sample(&bucket(QuestionKind::TrueFalse), counts.tf, &mut rng));
    picked.extend(sample(&bucket(QuestionKind::FillBlank), counts.fill, &mut rng));

    let shortfall = counts.total().saturating_sub(picked.len());
    if shortfall > 0 {
        let taken: HashSet<usize> = picked.iter().copied().collect();
        let remainder: Vec<usize> = (0..pool.len()).filter(|i| !taken.contains(i)).collect();
        let top_up = sample(&remainder, shortfall, &mut rng);
        log::debug!(
            "hybrid quiz short by {}, topped up {} from remaining pool",
            shortfall,
            top_up.len()
        );
        picked.extend(top_up);
    }

    let mut slots: Vec<Option<Question>> = pool.into_iter().map(Some).collect();
    let mut questions: Vec<Question> = picked
        .into_iter()
        .filter_map(|index| slots.get_mut(index).and_then(Option::take))
        .collect();

    if options.shuffle_options {
        for question in questions.iter_mut() {
            match question.kind {
                QuestionKind::MultipleChoice => shuffle_choices(question, &mut rng),
                QuestionKind::TrueFalse if question.options.is_empty() => {
                    question.options = vec!["True".to_string(), "False".to_string()];
                }
                _ => {}
            }
        }
    }

    if options.shuffle_questions {
        shuffle(&mut questions, &mut rng);
    }

    log::info!(
        "composed hybrid quiz with {} of {} requested questions (seed {})",
        questions.len(),
        counts.total(),
        seed
    );

    Quiz {
        title: options
            .title
            .unwrap_or_else(|| DEFAULT_HYBRID_TITLE.to_string()),
        subject: options
            .subject
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        kind: QuizKind::Hybrid,
        questions,
        hybrid_config: Some(HybridConfig {
            counts,
            seed,
            shuffle_questions: options.shuffle_questions,
            shuffle_options: options.shuffle_options,
        }),
    }
}

/// Shuffle the options of a multiple-choice question; a letter answer
/// keeps pointing at the option it named before the shuffle.
fn shuffle_choices(question: &mut Question, rng: &mut DeterministicRng) {
    let correct = letter_index(&question.correct_answer)
        .and_then(|index| question.options.get(index).cloned());

    shuffle(&mut question.options, rng);

    if let Some(text) = correct {
        if let Some(index) = question.options.iter().position(|o| *o == text) {
            question.correct_answer = answer_letter(index);
        }
    }
}
