use super::engine::rank;
use super::tokenizer::tokenize_query;
use super::types::{ErrorResponse, LexiconEntry, LexiconParams, LexiconResponse, LexiconRow};
use crate::app::{AppState, ALLOWED_HEADERS, ALLOWED_METHODS};
use crate::error::StoreError;
use crate::store::formula::contains_filter;
use crate::store::RowQuery;

use axum::extract::{Extension, Query};
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

const DEFAULT_ERROR_MESSAGE: &str = "Airtable error";

/// `GET /api/lexicon?q=...`
///
/// A missing, empty or unparsable `q` returns every row in store order.
pub async fn handle_lexicon(
    Extension(state): Extension<Arc<AppState>>,
    params: Option<Query<LexiconParams>>,
) -> Response {
    let raw_query = params
        .and_then(|Query(params)| params.q)
        .unwrap_or_default();
    let raw_query = raw_query.trim();

    match search_lexicon(&state, raw_query).await {
        Ok(rows) => {
            tracing::debug!("Lexicon query {:?} returned {} rows", raw_query, rows.len());
            (
                StatusCode::OK,
                Json(LexiconResponse {
                    count: rows.len(),
                    lexicon: rows,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Lexicon fetch failed: {}", err);
            error_response(&err)
        }
    }
}

/// `OPTIONS /api/lexicon`
pub async fn handle_preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS)),
            (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS)),
        ],
    )
        .into_response()
}

/// Fetches the candidate rows and ranks them against `raw_query`.
pub async fn search_lexicon(state: &AppState, raw_query: &str) -> Result<Vec<LexiconRow>, StoreError> {
    let query = RowQuery {
        filter_formula: if state.server_filter {
            contains_filter(raw_query)
        } else {
            None
        },
        fields: state.projected_columns(),
    };

    let records = state.store.fetch_rows(&query).await?;
    let entries: Vec<LexiconEntry> = records
        .iter()
        .map(|record| LexiconEntry::from_cells(&record.fields))
        .collect();

    let terms = tokenize_query(raw_query);
    let rows = rank(entries, &terms, &state.weights)
        .into_iter()
        .map(|entry| LexiconRow::project(entry, state.include_definition))
        .collect();

    Ok(rows)
}

pub fn error_response(err: &StoreError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = err.to_string();
    let message = if message.is_empty() {
        DEFAULT_ERROR_MESSAGE.to_string()
    } else {
        message
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
