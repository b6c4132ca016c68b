use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only content source. Built once at startup, never mutated.
    pub content: Arc<dyn ContentProvider>,
}

impl AppState {
    pub fn new(config: Config, content: Arc<dyn ContentProvider>) -> Self {
        Self { config, content }
    }
}
