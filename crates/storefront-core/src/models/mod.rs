//! Data models for storefront entities.
//!
//! - `Category`: a product category as served by `GET /categories/`

pub mod category;

pub use category::{Category, CategoryList};
