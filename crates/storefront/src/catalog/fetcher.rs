//! One-shot catalog retrieval.
//!
//! The catalog endpoint returns the full product list as a JSON array.
//! The client makes a single attempt per page load; on failure the caller
//! renders the error panel offering a manual reload, never an automatic
//! retry loop.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::StorefrontConfig;

use super::conversions::convert_product;
use super::types::{Product, ProductRecord};

/// Errors that can occur retrieving the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("catalog endpoint returned status {0}")]
    Status(u16),

    /// Endpoint answered with an empty body.
    #[error("catalog endpoint returned an empty body")]
    EmptyBody,

    /// Body was not a JSON array of product records.
    #[error("malformed catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the read-only catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint: config.catalog_endpoint.clone(),
            }),
        }
    }

    /// Fetch the full catalog.
    ///
    /// Single attempt: no retry, no cache beyond the snapshot the caller
    /// keeps for the session.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure, a non-success response
    /// status, an empty body, or a payload that is not a JSON array of
    /// product records.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .inner
            .client
            .get(&self.inner.endpoint)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        let records: Vec<ProductRecord> = serde_json::from_str(&body)?;
        debug!(count = records.len(), "catalog fetched");

        Ok(records.into_iter().map(convert_product).collect())
    }
}
