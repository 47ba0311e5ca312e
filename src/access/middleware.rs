use super::gate::{GateDecision, FORWARDED_FOR};
use super::types::{Denial, DenialResponse};
use crate::app::{AppState, ALLOWED_HEADERS, ALLOWED_METHODS};

use axum::extract::{ConnectInfo, Extension, Request};
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the access gate ahead of routing. Allowed requests continue untouched.
pub async fn access_gate(
    Extension(state): Extension<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    // Non-ASCII bytes must not turn a present header into an absent one.
    let forwarded_for = request
        .headers()
        .get(FORWARDED_FOR)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    let peer_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let decision = state
        .gate
        .check(request.uri().path(), forwarded_for.as_deref(), peer_ip.as_deref());

    match decision {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Deny(denial) => {
            tracing::warn!(
                "Denied {} {} for client ip {:?}",
                request.method(),
                request.uri().path(),
                denial.ip
            );
            denial_response(&denial)
        }
    }
}

/// The allow-origin header is added by the router-wide layer.
pub fn denial_response(denial: &Denial) -> Response {
    let status = StatusCode::from_u16(denial.status).unwrap_or(StatusCode::FORBIDDEN);
    (
        status,
        [
            (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS)),
            (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS)),
        ],
        Json(DenialResponse::from(denial)),
    )
        .into_response()
}
