pub mod question;
pub mod quiz;
pub use question::{Question, QuestionKind};
pub use quiz::{HybridConfig, HybridCounts, Quiz, QuizKind};
