// Application state shared across all modules

use std::sync::Arc;

use crate::common::config::ServiceConfig;
use crate::validation::{PatternSanitizer, Sanitizer};

/// Application state containing configuration and the active sanitizer
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub sanitizer: Arc<dyn Sanitizer + Send + Sync>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
            sanitizer: Arc::new(PatternSanitizer),
        }
    }

    pub fn with_sanitizer(mut self, sanitizer: Arc<dyn Sanitizer + Send + Sync>) -> Self {
        self.sanitizer = sanitizer;
        self
    }
}
