use reqwest::Client;
use std::time::Duration;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{BookDoc, SearchResponse};
use crate::config::CatalogConfig;

/// HTTP client for the Open Library search endpoint.
///
/// Issues one GET per search. Only a connect timeout is set; an in-flight
/// request is never cut short.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .expect("Failed to build catalog client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit,
        }
    }

    /// Search the catalog by title.
    ///
    /// The query is URL-encoded into the `title` parameter; the configured
    /// result limit is passed as `limit`. Returns the `docs` entries in
    /// response order (absent or empty `docs` is an empty vec).
    pub async fn search(&self, query: &str) -> Result<Vec<BookDoc>, CatalogError> {
        let url = format!("{}/search.json", self.base_url);
        tracing::debug!(query = %query, limit = self.limit, "catalog search");

        let response = self
            .client
            .get(&url)
            .query(&[("title", query)])
            .query(&[("limit", self.limit)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(query = %query, error = %e, "catalog request failed");
                CatalogError::Transport { source: e }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(query = %query, status = status.as_u16(), "catalog returned error status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Transport { source: e })?;
        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| CatalogError::Malformed { source: e })?;

        tracing::debug!(query = %query, count = parsed.docs.len(), "catalog search finished");
        Ok(parsed.docs)
    }
}
