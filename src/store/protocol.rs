//! Airtable REST Protocol
//!
//! Query parameters and response bodies of the Airtable "list records"
//! endpoint (`GET /v0/{base}/{table}`).

use crate::lexicon::normalize::CellValue;
use serde::Deserialize;
use std::collections::HashMap;

/// Default endpoint root of the Airtable REST API.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
/// Largest page the list endpoint will return.
pub const PAGE_SIZE: u32 = 100;

pub const PARAM_FIELDS: &str = "fields[]";
pub const PARAM_FILTER: &str = "filterByFormula";
pub const PARAM_PAGE_SIZE: &str = "pageSize";
pub const PARAM_OFFSET: &str = "offset";

/// One page of records.
///
/// `offset` is present while more pages remain.
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<StoreRecord>,
    pub offset: Option<String>,
}

/// A single table row. Columns with no value are omitted by Airtable.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: HashMap<String, CellValue>,
}

/// Error envelope. Airtable uses both `{"error": "NOT_FOUND"}` and
/// `{"error": {"type": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Code(String),
    Detailed {
        #[serde(rename = "type")]
        kind: Option<String>,
        message: Option<String>,
    },
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self {
            ErrorBody::Code(code) => Some(code.clone()),
            ErrorBody::Detailed { message: Some(m), .. } => Some(m.clone()),
            ErrorBody::Detailed { kind, .. } => kind.clone(),
        }
        .filter(|m| !m.is_empty())
    }
}
