#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::question::{Question, QuestionKind, TRUE_FALSE_OPTIONS};

    /// Builds a question without going through the normalizer
    pub fn question(text: &str, kind: QuestionKind, options: &[&str], answer: &str) -> Question {
        Question {
            text: text.to_string(),
            kind,
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: answer.to_string(),
            explanation: String::new(),
        }
    }

    /// Nine normalized questions: four multiple-choice, three true-false
    /// and two fill-blank.
    pub fn sample_pool() -> Vec<Question> {
        vec![
            question(
                "What is the capital of France?",
                QuestionKind::MultipleChoice,
                &["Paris", "Lyon", "Nice", "Dijon"],
                "A",
            ),
            question(
                "Which gas do plants absorb?",
                QuestionKind::MultipleChoice,
                &["Oxygen", "Carbon dioxide", "Nitrogen", "Helium"],
                "B",
            ),
            question(
                "Which organelle makes ATP?",
                QuestionKind::MultipleChoice,
                &["Nucleus", "Ribosome", "Mitochondria", "Golgi"],
                "C",
            ),
            question(
                "What is the largest planet?",
                QuestionKind::MultipleChoice,
                &["Mars", "Venus", "Earth", "Jupiter"],
                "D",
            ),
            question("Water boils at 100C at sea level.", QuestionKind::TrueFalse, &TRUE_FALSE_OPTIONS, "True"),
            question("The sun orbits the earth.", QuestionKind::TrueFalse, &TRUE_FALSE_OPTIONS, "False"),
            question("DNA is a double helix.", QuestionKind::TrueFalse, &TRUE_FALSE_OPTIONS, "True"),
            question(
                "The chemical symbol for gold is ____.",
                QuestionKind::FillBlank,
                &["Au", "Ag", "Gd", "Go"],
                "Au",
            ),
            question(
                "The speed of light is about ____ km/s.",
                QuestionKind::FillBlank,
                &["300000", "150000", "30000", "3000"],
                "300000",
            ),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::question::{QuestionKind, OPTION_COUNT};

    #[test]
    fn test_sample_pool_mix() {
        let pool = sample_pool();
        let count = |kind: QuestionKind| pool.iter().filter(|q| q.kind == kind).count();

        assert_eq!(pool.len(), 9);
        assert_eq!(count(QuestionKind::MultipleChoice), 4);
        assert_eq!(count(QuestionKind::TrueFalse), 3);
        assert_eq!(count(QuestionKind::FillBlank), 2);
    }

    #[test]
    fn test_sample_pool_is_normalized() {
        assert!(sample_pool()
            .iter()
            .all(|q| !q.text.is_empty() && q.options.len() == OPTION_COUNT));
    }
}
