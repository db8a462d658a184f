//! Bounded Cache - A fixed-capacity in-memory key-value cache
//!
//! Provides FIFO, LRU and LFU eviction with discard notifications.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod replay;
pub mod shared;

pub use cache::{Cache, DiscardEvent, DiscardObserver, PolicyKind};
pub use config::Config;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
