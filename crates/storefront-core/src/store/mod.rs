//! In-memory state for data fetched from the storefront API.
//!
//! The `CategoryStore` holds the category list views render from. It starts
//! empty and is replaced wholesale each time a fetch succeeds; a failed
//! fetch leaves the previous list in place.
//!
//! The store reads through the `CategorySource` trait, implemented by
//! `ApiClient` for the real backend.

pub mod category;

pub use category::{CategorySource, CategoryStore};
