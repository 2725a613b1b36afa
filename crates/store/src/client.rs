//! Typed client for the document store's query endpoint.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::error;

use hekto_core::Record;
use hekto_shared::StoreConfig;

/// The fixed projection selecting every stored customer document.
///
/// The query language and its execution belong to the store; this shell
/// only ever issues this one read-only projection.
pub const CUSTOMER_QUERY: &str = "*[_type == \"customer\"]{ name, email, phone, city, address1, \
                                  address2, items[]{ name, id, description, price } }";

/// Error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configured API token is not a valid header value.
    #[error("Store API token is not a valid header value")]
    InvalidToken,

    /// Transport-level failure, including response decoding.
    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store returned HTTP {0}")]
    Status(StatusCode),
}

/// Client for the store's read-only query endpoint.
///
/// Each call is a fresh, independent round trip: no retries, no timeout,
/// no caching.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    query_url: String,
}

impl StoreClient {
    /// Builds a client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// configured token is not header-safe.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| StoreError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let query_url = format!(
            "{}/data/query/{}",
            config.base_url.trim_end_matches('/'),
            config.dataset
        );

        Ok(Self { http, query_url })
    }

    /// Executes the customer projection and decodes the result envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn query_customers(&self) -> Result<Vec<Record>, StoreError> {
        let response = self
            .http
            .get(&self.query_url)
            .query(&[("query", CUSTOMER_QUERY)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status));
        }

        let envelope: QueryResponse = response.json().await?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Fetches the customer records, substituting the empty list on failure.
    ///
    /// This is the fail-open contract the views rely on: a broken store
    /// degrades the dashboard to its empty state instead of crashing it, and
    /// the error is visible only in the logs.
    pub async fn fetch_customers(&self) -> Vec<Record> {
        match self.query_customers().await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to fetch customer records from store");
                Vec::new()
            }
        }
    }
}

/// The store wraps query results in a `result` envelope; a query matching
/// nothing may answer with `null` instead of `[]`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Vec<Record>>,
}
