//! Reply DTOs for the replay front end
//!
//! Defines the JSON objects written back, one per line.

use serde::Serialize;

use crate::cache::{CacheSnapshot, CacheStats, DiscardEvent};

/// Reply to a `get` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetResponse {
    /// The requested key, `None` if the request carried none
    pub key: Option<String>,
    /// The stored value, `None` on a miss
    pub value: Option<String>,
}

impl GetResponse {
    pub fn new(key: Option<String>, value: Option<String>) -> Self {
        Self { key, value }
    }
}

/// Reply to a `put` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PutResponse {
    pub key: Option<String>,
    /// False when the key or value was absent and nothing was stored
    pub stored: bool,
}

impl PutResponse {
    pub fn new(key: Option<String>, stored: bool) -> Self {
        Self { key, stored }
    }
}

/// Reply to a `delete` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteResponse {
    pub key: String,
    /// False when the key was not present
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>, deleted: bool) -> Self {
        Self {
            key: key.into(),
            deleted,
        }
    }
}

/// Reply to a `stats` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub rejected: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            rejected: stats.rejected,
            total_entries: stats.total_entries,
        }
    }
}

/// Written whenever a request caused an eviction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardNotice {
    /// Always `"discard"`
    pub event: &'static str,
    pub evicted_key: String,
}

impl From<DiscardEvent<String>> for DiscardNotice {
    fn from(event: DiscardEvent<String>) -> Self {
        Self {
            event: "discard",
            evicted_key: event.evicted_key,
        }
    }
}

/// Reply for a line that could not be handled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Any line the replay front end writes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Get(GetResponse),
    Put(PutResponse),
    Delete(DeleteResponse),
    Stats(StatsResponse),
    Snapshot(CacheSnapshot<String, String>),
    Discard(DiscardNotice),
    Error(ErrorResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_hit_and_miss() {
        let hit = serde_json::to_value(GetResponse::new(Some("A".into()), Some("a".into()))).unwrap();
        assert_eq!(hit, serde_json::json!({ "key": "A", "value": "a" }));

        let miss = serde_json::to_value(GetResponse::new(Some("A".into()), None)).unwrap();
        assert_eq!(miss, serde_json::json!({ "key": "A", "value": null }));
    }

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            evictions: 2,
            rejected: 0,
            total_entries: 4,
        };
        let resp = StatsResponse::from(stats);
        assert_eq!(resp.hit_rate, 0.75);
        assert_eq!(resp.evictions, 2);
    }

    #[test]
    fn test_discard_notice_serialize() {
        let notice = DiscardNotice::from(DiscardEvent::new("A".to_string()));
        let json = serde_json::to_value(Reply::Discard(notice)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "event": "discard", "evicted_key": "A" })
        );
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&Reply::Error(ErrorResponse::new("bad line"))).unwrap();
        assert_eq!(json, r#"{"error":"bad line"}"#);
    }
}
