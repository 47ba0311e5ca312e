//! Row Store Module
//!
//! The lexicon lives in an external tabular datastore (Airtable). This module
//! is the only place that talks to it.
//!
//! ## Submodules
//! - **`client`**: `AirtableClient`, the REST implementation of [`LexiconStore`].
//! - **`formula`**: Builds the optional server-side pre-filter expression.
//! - **`protocol`**: Wire DTOs and endpoint constants.
//!
//! Server-side filtering only narrows the fetch. Ranking never depends on it and
//! stays correct when the store returns unfiltered rows.

pub mod client;
pub mod formula;
pub mod protocol;

use crate::error::StoreError;
use async_trait::async_trait;
use protocol::StoreRecord;

/// What to fetch: an optional filter expression and the columns to return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowQuery {
    pub filter_formula: Option<String>,
    pub fields: Vec<String>,
}

/// Source of lexicon rows. One call fetches every matching row.
#[async_trait]
pub trait LexiconStore: Send + Sync {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<StoreRecord>, StoreError>;
}
