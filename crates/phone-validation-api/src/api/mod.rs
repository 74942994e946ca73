//! HTTP API for the validation service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::analysis::{NumberAnalyzer, PhoneNumberAnalyzer};
use crate::auth::ProxySecretGate;
use crate::config::Config;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Proxy secret check run before every validation
    pub gate: Arc<ProxySecretGate>,
    /// Phone number parser and metadata source
    pub analyzer: Arc<dyn NumberAnalyzer>,
}

impl AppState {
    /// Create new application state.
    pub fn new(gate: ProxySecretGate, analyzer: Arc<dyn NumberAnalyzer>) -> Self {
        Self {
            gate: Arc::new(gate),
            analyzer,
        }
    }

    /// State backed by the `phonenumber` analyzer, gated by the configured secret.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ProxySecretGate::new(config.rapidapi_proxy_secret.clone()),
            Arc::new(PhoneNumberAnalyzer::new()),
        )
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no authorization)
        .route("/health", get(handlers::health))
        .route("/validate", get(handlers::validate))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
