//! REST API client module for the bookstore backend.
//!
//! This module provides the `ApiClient` for fetching catalog data from the
//! storefront API. Requests carry no credentials; the only endpoint the
//! storefront reads is the public category listing.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
