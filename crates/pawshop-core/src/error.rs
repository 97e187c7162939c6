//! Error types for the cart hub and configuration.

use pawshop_cache::CacheError;
use pawshop_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur in pawshop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The cart slot could not be written.
    #[error("Storage error: {0}")]
    Cache(#[from] CacheError),

    /// The requested cart change was rejected.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
