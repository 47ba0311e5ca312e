//! Shared fixtures for router-level tests.

use crate::access::gate::Allowlist;
use crate::app::{build_router, AppState};
use crate::config::AppConfig;
use crate::error::StoreError;
use crate::lexicon::normalize::CellValue;
use crate::store::protocol::StoreRecord;
use crate::store::{LexiconStore, RowQuery};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const ALLOWED_IP: &str = "3.143.106.159";

/// In-memory store that records every query it receives.
pub struct FakeStore {
    records: Vec<StoreRecord>,
    failure: Option<(u16, String)>,
    pub queries: Mutex<Vec<RowQuery>>,
}

impl FakeStore {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| record(&format!("rec{}", i), row))
            .collect();
        Self {
            records,
            failure: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            records: Vec::new(),
            failure: Some((status, message.to_string())),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn last_query(&self) -> Option<RowQuery> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LexiconStore for FakeStore {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<StoreRecord>, StoreError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.failure {
            Some((status, message)) => Err(StoreError::Upstream {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(self.records.clone()),
        }
    }
}

/// Builds a record from a JSON object of column -> cell.
pub fn record(id: &str, fields: Value) -> StoreRecord {
    let fields: HashMap<String, CellValue> = match fields {
        Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| (k, CellValue::from(v)))
            .collect(),
        _ => HashMap::new(),
    };
    StoreRecord {
        id: id.to_string(),
        fields,
    }
}

pub fn test_config(pairs: &[(&str, &str)]) -> AppConfig {
    let mut map: HashMap<String, String> = [
        ("AIRTABLE_ACCESS_TOKEN", "pat-test"),
        ("AIRTABLE_BASE_ID", "appTest"),
        ("LEXICON_TABLE", "Lexicon"),
        ("ACCESS_ALLOWLIST", ALLOWED_IP),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in pairs {
        map.insert(k.to_string(), v.to_string());
    }
    AppConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}

pub fn router_with(store: Arc<FakeStore>, config: &AppConfig) -> Router {
    build_router(Arc::new(AppState::from_config(config, store)))
}

pub fn router_with_allowlist(store: Arc<FakeStore>, allowlist: Allowlist) -> Router {
    let mut config = test_config(&[]);
    config.allowlist = allowlist;
    router_with(store, &config)
}

pub async fn send(router: Router, request: Request<Body>) -> (Response<Body>, Value) {
    let response = router.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    // Non-JSON bodies (health check, preflight) come back as Null.
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (Response::from_parts(parts, Body::empty()), json)
}

pub fn get_from(uri: &str, ip: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", ip)
        .body(Body::empty())
        .unwrap()
}
