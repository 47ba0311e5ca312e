//! Router assembly and the state shared by every request.

use crate::access::gate::AccessGate;
use crate::access::middleware::access_gate;
use crate::config::AppConfig;
use crate::lexicon::handlers::{handle_lexicon, handle_preflight};
use crate::lexicon::types::{FieldWeights, LexiconField};
use crate::store::LexiconStore;

use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{middleware, Extension, Router};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

/// Public lexicon search endpoint.
pub const ENDPOINT_LEXICON: &str = "/api/lexicon";
/// Liveness check. Outside the protected prefix.
pub const ENDPOINT_HEALTH: &str = "/health";

pub const ALLOWED_METHODS: &str = "GET,OPTIONS";
pub const ALLOWED_HEADERS: &str = "content-type";

/// Read-only per-process state, built once at startup.
pub struct AppState {
    pub store: Arc<dyn LexiconStore>,
    pub gate: AccessGate,
    pub cors_origin: HeaderValue,
    pub weights: FieldWeights,
    pub include_definition: bool,
    pub server_filter: bool,
}

impl AppState {
    pub fn from_config(config: &AppConfig, store: Arc<dyn LexiconStore>) -> Self {
        Self {
            store,
            gate: AccessGate::new(config.allowlist.clone()),
            cors_origin: config.cors_allow_origin.clone(),
            weights: FieldWeights::default(),
            include_definition: config.include_definition,
            server_filter: config.server_filter,
        }
    }

    /// Columns requested from the store.
    pub fn projected_columns(&self) -> Vec<String> {
        LexiconField::ALL
            .iter()
            .filter(|field| self.include_definition || **field != LexiconField::Definition)
            .map(|field| field.column().to_string())
            .collect()
    }
}

/// Every response, denials included, carries the configured allow-origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_origin = state.cors_origin.clone();
    Router::new()
        .route(ENDPOINT_LEXICON, get(handle_lexicon).options(handle_preflight))
        .route(ENDPOINT_HEALTH, get(|| async { "ok" }))
        .layer(middleware::from_fn(access_gate))
        .layer(Extension(state))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            cors_origin,
        ))
}
