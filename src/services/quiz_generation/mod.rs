pub mod fallback;
pub mod hybrid;
pub mod model_output;
pub mod normalizer;
pub mod rng;
pub mod sampling;

pub use fallback::fallback_quiz;
pub use hybrid::{compose_hybrid, HybridOptions};
pub use model_output::parse_model_output;
pub use normalizer::{normalize_quiz, NormalizedQuiz};
pub use rng::{AmbientRng, DeterministicRng, RandomSource, Seed};
pub use sampling::{sample, shuffle};
