use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion transport. Production: OpenAiBackend. Tests swap
    /// in canned or failing stubs.
    pub llm: Arc<dyn CompletionBackend>,
    /// Kept for handlers that need runtime settings; only main reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
