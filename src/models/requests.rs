//! Request DTOs for the replay front end
//!
//! One request per input line, tagged by `op`.

use serde::Deserialize;

/// A single cache operation.
///
/// `key` and `value` may be `null` or missing on `put` and `get`; the cache
/// ignores such requests instead of failing them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Store a value
    Put {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    /// Look up a value
    Get {
        #[serde(default)]
        key: Option<String>,
    },
    /// Remove a key without counting it as an eviction
    Delete { key: String },
    /// Dump the current contents
    Print,
    /// Report hit/miss/eviction counters
    Stats,
}

impl Request {
    /// Parses one input line.
    pub fn parse(line: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}
