//! Cache Module
//!
//! Provides a bounded in-memory cache with FIFO, LRU and LFU eviction.

mod bounded_map;
mod keyed_list;
mod observer;
mod policy;
mod snapshot;
mod stats;
mod store;


// Re-export public types
pub use bounded_map::BoundedMap;
pub use keyed_list::KeyedList;
pub use observer::{ChannelObserver, DiscardEvent, DiscardLog, DiscardObserver, TracingObserver};
pub use policy::{EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, PolicyKind};
pub use snapshot::{CacheSnapshot, SnapshotEntry};
pub use stats::CacheStats;
pub use store::Cache;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_ITEMS: usize = 4;
