use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppResult, QuizResult},
    models::domain::{HybridCounts, Question, QuestionKind, Quiz, QuizKind},
    services::quiz_generation::{
        compose_hybrid, fallback_quiz, normalize_quiz, parse_model_output, AmbientRng,
        HybridOptions,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    pub quiz: Quiz,
    pub used_fallback: bool,
}

pub struct QuizService {
    default_title: String,
    default_subject: String,
    fallback_question_count: usize,
}

impl QuizService {
    pub fn new(config: &Config) -> Self {
        Self {
            default_title: config.default_quiz_title.clone(),
            default_subject: config.default_subject.clone(),
            fallback_question_count: config.fallback_question_count,
        }
    }

    /// Normalize already parsed model JSON into a single-type quiz.
    pub fn normalize(&self, raw: &Value, kind: QuestionKind, subject: Option<String>) -> AppResult<Quiz> {
        let normalized = normalize_quiz(raw, kind)?;
        Ok(Quiz::single(
            normalized.title,
            self.subject_or_default(subject),
            kind,
            normalized.questions,
        ))
    }

    /// Turn a raw chat completion into a quiz, substituting the content
    /// fallback when the completion cannot be used. Never fails.
    pub fn generate_from_model_output(
        &self,
        model_output: &str,
        kind: QuestionKind,
        content: &str,
        question_count: Option<usize>,
        subject: Option<String>,
    ) -> GeneratedQuiz {
        let subject = self.subject_or_default(subject);

        let parsed: QuizResult<_> =
            parse_model_output(model_output).and_then(|raw| normalize_quiz(&raw, kind));

        match parsed {
            Ok(normalized) => GeneratedQuiz {
                quiz: Quiz::single(normalized.title, subject, kind, normalized.questions),
                used_fallback: false,
            },
            Err(e) => {
                log::warn!("Model output unusable ({}), building content fallback quiz", e);
                GeneratedQuiz {
                    quiz: self.fallback(content, question_count, Some(subject)),
                    used_fallback: true,
                }
            }
        }
    }

    pub fn fallback(&self, content: &str, question_count: Option<usize>, subject: Option<String>) -> Quiz {
        let count = question_count.unwrap_or(self.fallback_question_count);
        let fallback = fallback_quiz(content, count, &mut AmbientRng::new());

        Quiz {
            title: fallback.title,
            subject: self.subject_or_default(subject),
            kind: QuizKind::MultipleChoice,
            questions: fallback.questions,
            hybrid_config: None,
        }
    }

    pub fn compose_hybrid(
        &self,
        pool: Vec<Question>,
        counts: HybridCounts,
        mut options: HybridOptions,
    ) -> Quiz {
        options.title = non_blank(options.title).or_else(|| Some(self.default_title.clone()));
        options.subject = Some(self.subject_or_default(options.subject));
        compose_hybrid(pool, counts, options)
    }

    fn subject_or_default(&self, subject: Option<String>) -> String {
        non_blank(subject).unwrap_or_else(|| self.default_subject.clone())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
