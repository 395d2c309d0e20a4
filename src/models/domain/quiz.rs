use serde::{Deserialize, Serialize};

use crate::models::domain::question::{Question, QuestionKind};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub subject: String,
    pub kind: QuizKind,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hybrid_config: Option<HybridConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    MultipleChoice,
    TrueFalse,
    FillBlank,
    Hybrid,
}

impl From<QuestionKind> for QuizKind {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::MultipleChoice => QuizKind::MultipleChoice,
            QuestionKind::TrueFalse => QuizKind::TrueFalse,
            QuestionKind::FillBlank => QuizKind::FillBlank,
        }
    }
}

/// Requested number of questions per kind for a hybrid quiz.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub struct HybridCounts {
    pub mcq: usize,
    pub tf: usize,
    pub fill: usize,
}

impl HybridCounts {
    pub fn total(&self) -> usize {
        self.mcq.saturating_add(self.tf).saturating_add(self.fill)
    }
}

/// Echo of the composition inputs, kept on the quiz for auditing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridConfig {
    pub counts: HybridCounts,
    pub seed: u32,
    pub shuffle_questions: bool,
    pub shuffle_options: bool,
}

impl Quiz {
    pub fn single(
        title: impl Into<String>,
        subject: impl Into<String>,
        kind: QuestionKind,
        questions: Vec<Question>,
    ) -> Self {
        Quiz {
            title: title.into(),
            subject: subject.into(),
            kind: kind.into(),
            questions,
            hybrid_config: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
