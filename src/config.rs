//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

use crate::cache::{PolicyKind, DEFAULT_MAX_ITEMS};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
    /// Eviction policy applied when the cache is full
    pub policy: PolicyKind,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Maximum cache entries (default: 4)
    /// - `CACHE_POLICY` - `fifo`, `lru` or `lfu` (default: lru)
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            max_items: env::var("MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ITEMS),
            policy: env::var("CACHE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Rejects configurations the cache cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(CacheError::InvalidCapacity(self.max_items));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            policy: PolicyKind::default(),
        }
    }
}
