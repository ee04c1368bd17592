//! Utility functions for display formatting.

pub mod format;

// Re-export commonly used items at module level
pub use format::{as_dollars_and_cents, PriceFormatter};
