//! Application state for the storefront command line.
//!
//! `App` owns the resolved configuration and the category store. Prices are
//! formatted with a `PriceFormatter` passed in by the caller.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use storefront_core::{ApiClient, CategoryStore, Config, PriceFormatter};

pub struct App {
    pub config: Config,
    pub categories: CategoryStore<ApiClient>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::from_config(&config).context("Failed to build HTTP client")?;
        info!(api_base_url = %client.base_url(), "Storefront client ready");

        Ok(Self {
            config,
            categories: CategoryStore::new(client),
        })
    }

    /// Fetch categories and render them as text or JSON
    pub async fn list_categories(&self, as_json: bool) -> Result<String> {
        self.categories
            .fetch_categories()
            .await
            .with_context(|| format!("Failed to fetch categories from {}", self.config.api_base_url))?;

        let categories = self.categories.categories().await;
        if as_json {
            return Ok(serde_json::to_string_pretty(&categories[..])?);
        }

        let mut out = String::new();
        for category in categories.iter() {
            out.push_str(&format!("{:>6}  {}\n", category.id, category.name));
        }
        let fetched_at = self
            .categories
            .last_updated()
            .await
            .map(|t| t.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_default();
        out.push_str(&format!("{} categories (fetched {})", categories.len(), fetched_at));
        Ok(out)
    }

}

/// One formatted price per line
pub fn format_prices(formatter: &PriceFormatter, cents: &[i64]) -> String {
    cents
        .iter()
        .map(|c| formatter.format(*c))
        .collect::<Vec<_>>()
        .join("\n")
}
