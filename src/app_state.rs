use std::sync::Arc;

use crate::{config::Config, services::quiz_service::QuizService};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let quiz_service = Arc::new(QuizService::new(&config));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_keeps_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.default_subject, "General");
    }
}
