//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its replay front end.
///
/// Absent keys or values are not errors: the cache ignores them silently.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy name did not match fifo, lru or lfu
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Replay request could not be parsed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reading requests or writing replies failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::InvalidRequest(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
