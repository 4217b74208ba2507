use std::sync::Arc;

use crate::config::Config;
use crate::provider::{select_provider, FeedbackProvider};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Review backend for one request, keyed on the caller's optional API key.
    pub fn provider_for(&self, request_key: Option<&str>) -> Arc<dyn FeedbackProvider> {
        select_provider(request_key, &self.config)
    }
}
