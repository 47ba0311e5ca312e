use super::protocol::*;
use super::{LexiconStore, RowQuery};
use crate::error::StoreError;

use async_trait::async_trait;

/// Reads lexicon rows from an Airtable table over the REST API.
pub struct AirtableClient {
    http_client: reqwest::Client,
    api_url: String,
    base_id: String,
    table: String,
    access_token: String,
}

impl AirtableClient {
    pub fn new(api_url: &str, base_id: &str, table: &str, access_token: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            base_id: base_id.to_string(),
            table: table.to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Base and table are encoded as single path segments; table names may
    /// contain `#`, `?` or `/`.
    pub fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(&self.table)
        )
    }

    async fn fetch_page(
        &self,
        query: &RowQuery,
        offset: Option<&str>,
    ) -> Result<ListRecordsResponse, StoreError> {
        let mut params: Vec<(&str, String)> = query
            .fields
            .iter()
            .map(|field| (PARAM_FIELDS, field.clone()))
            .collect();
        if let Some(formula) = &query.filter_formula {
            params.push((PARAM_FILTER, formula.clone()));
        }
        params.push((PARAM_PAGE_SIZE, PAGE_SIZE.to_string()));
        if let Some(offset) = offset {
            params.push((PARAM_OFFSET, offset.to_string()));
        }

        let response = self
            .http_client
            .get(self.table_url())
            .bearer_auth(&self.access_token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LexiconStore for AirtableClient {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<StoreRecord>, StoreError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.fetch_page(query, offset.as_deref()).await?;
            records.extend(page.records);

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => break,
            }
        }

        tracing::debug!("Fetched {} records from {}", records.len(), self.table);
        Ok(records)
    }
}

/// Maps a failed response to an error carrying the store's own message when
/// the body has one, otherwise the HTTP reason phrase.
pub fn upstream_error(status: reqwest::StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    StoreError::Upstream {
        status: status.as_u16(),
        message,
    }
}
