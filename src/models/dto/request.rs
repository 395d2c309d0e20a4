use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::models::domain::question::{parse_question_kind, QuestionKind};
use crate::models::domain::{HybridCounts, Question};
use crate::services::quiz_generation::{HybridOptions, Seed};

pub const MAX_QUESTION_COUNT: u64 = 50;
pub const MAX_POOL_SIZE: u64 = 500;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeQuizRequest {
    pub raw: Value,

    #[validate(length(min = 1, max = 40))]
    pub quiz_type: String,

    #[validate(length(max = 100))]
    pub subject: Option<String>,
}

impl NormalizeQuizRequest {
    pub fn kind(&self) -> QuestionKind {
        parse_question_kind(&self.quiz_type)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(max = 200000))]
    pub model_output: String,

    #[validate(length(min = 1, max = 40))]
    pub quiz_type: String,

    #[serde(default)]
    #[validate(length(max = 500000))]
    pub content: String,

    #[validate(range(min = 1, max = 50))]
    pub question_count: Option<u64>,

    #[validate(length(max = 100))]
    pub subject: Option<String>,
}

impl GenerateQuizRequest {
    pub fn kind(&self) -> QuestionKind {
        parse_question_kind(&self.quiz_type)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FallbackQuizRequest {
    #[serde(default)]
    #[validate(length(max = 500000))]
    pub content: String,

    #[validate(range(min = 1, max = 50))]
    pub question_count: Option<u64>,

    #[validate(length(max = 100))]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HybridQuizRequest {
    #[validate(length(max = 500))]
    #[validate(nested)]
    pub pool: Vec<Question>,

    #[serde(default)]
    pub mcq_count: i64,

    #[serde(default)]
    pub tf_count: i64,

    #[serde(default)]
    pub fill_count: i64,

    pub seed: Option<Seed>,

    #[serde(default)]
    pub shuffle_questions: bool,

    #[serde(default)]
    pub shuffle_options: bool,

    #[validate(length(max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 100))]
    pub subject: Option<String>,
}

impl HybridQuizRequest {
    /// Negative counts are treated as zero; each count is capped at the
    /// largest quiz the service builds.
    pub fn counts(&self) -> HybridCounts {
        let clamp = |n: i64| n.clamp(0, MAX_POOL_SIZE as i64) as usize;
        HybridCounts {
            mcq: clamp(self.mcq_count),
            tf: clamp(self.tf_count),
            fill: clamp(self.fill_count),
        }
    }

    pub fn into_parts(self) -> (Vec<Question>, HybridCounts, HybridOptions) {
        let counts = self.counts();
        let options = HybridOptions {
            seed: self.seed,
            shuffle_questions: self.shuffle_questions,
            shuffle_options: self.shuffle_options,
            title: self.title,
            subject: self.subject,
        };
        (self.pool, counts, options)
    }
}

pub fn question_count(value: Option<u64>) -> Option<usize> {
    value.map(|n| n.min(MAX_QUESTION_COUNT) as usize)
}
