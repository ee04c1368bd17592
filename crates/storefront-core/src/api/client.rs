//! API client for the bookstore storefront REST API.
//!
//! This module provides the `ApiClient` struct for fetching catalog data
//! from the backend configured by `Config::api_base_url`.

use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{Category, CategoryList};
use crate::store::CategorySource;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Path of the category listing, relative to the API base URL.
/// The trailing slash is part of the backend route.
const CATEGORIES_PATH: &str = "categories/";

/// API client for the storefront backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    ///
    /// No request timeout is installed; a fetch runs until the transport
    /// completes or fails.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, None)
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::build(
            &config.api_base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url = url, "GET");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;

        // Read the body first so transport errors and parse errors stay distinct
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::malformed(url, e))
    }

    // ===== Data Fetching Methods =====

    /// Fetch the full category list, in backend order
    pub async fn fetch_categories(&self) -> Result<CategoryList, ApiError> {
        let url = self.endpoint(CATEGORIES_PATH);
        let categories: CategoryList = self.get(&url).await.inspect_err(|e| {
            warn!(url = %url, error = %e, "Failed to fetch categories");
        })?;
        debug!("Fetched {} categories", categories.len());
        Ok(categories)
    }
}

impl CategorySource for ApiClient {
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send {
        ApiClient::fetch_categories(self)
    }
}
