//! Core library for the bookstore storefront.
//!
//! - `api`: HTTP client for the storefront backend
//! - `models`: validated records returned by the backend
//! - `store`: in-memory `CategoryStore` populated from the API
//! - `config`: API base URL resolution
//! - `utils`: price formatting

pub mod api;
pub mod config;
pub mod models;
pub mod store;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use models::{Category, CategoryList};
pub use store::{CategorySource, CategoryStore};
pub use utils::{as_dollars_and_cents, PriceFormatter};
