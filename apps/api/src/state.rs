use std::sync::Arc;

use crate::llm_client::Generator;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store backend, Postgres or in-memory depending on `DATABASE_URL`.
    pub store: Arc<dyn DocumentStore>,
    pub generator: Arc<dyn Generator>,
}
