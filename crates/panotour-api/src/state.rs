//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_cheap_to_clone() {
        let state = AppState::new(ApiConfig::new("127.0.0.1", 3000, "secret"));
        let clone = state.clone();
        assert_eq!(clone.config.port, 3000);
    }
}
