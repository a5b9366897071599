use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model client. `LlmClient` in production, a scripted generator in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
    pub sessions: SessionStore,
}
