//! Discard Observer Module
//!
//! Eviction notifications are pushed to an injected observer rather than
//! printed, so callers decide where they go.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

// == Discard Event ==
/// Emitted once per eviction. Carries the evicted key only, never the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardEvent<K> {
    pub evicted_key: K,
}

impl<K> DiscardEvent<K> {
    pub fn new(evicted_key: K) -> Self {
        Self { evicted_key }
    }
}

// == Discard Observer ==
/// Receives discard events from a cache.
pub trait DiscardObserver<K>: Send {
    fn on_discard(&self, event: &DiscardEvent<K>);
}

impl<K, F> DiscardObserver<K> for F
where
    F: Fn(&DiscardEvent<K>) + Send,
{
    fn on_discard(&self, event: &DiscardEvent<K>) {
        self(event)
    }
}

// == Tracing Observer ==
/// Logs every discard at info level. Default observer for new caches.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<K> DiscardObserver<K> for TracingObserver
where
    K: fmt::Debug,
{
    fn on_discard(&self, event: &DiscardEvent<K>) {
        info!(evicted_key = ?event.evicted_key, "DISCARD");
    }
}

// == Discard Log ==
/// Records discard events in memory. Clones share the same log.
#[derive(Debug)]
pub struct DiscardLog<K> {
    events: Arc<Mutex<Vec<DiscardEvent<K>>>>,
}

impl<K> DiscardLog<K>
where
    K: Clone,
{
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns every recorded event, oldest first.
    pub fn events(&self) -> Vec<DiscardEvent<K>> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the evicted keys, oldest first.
    pub fn keys(&self) -> Vec<K> {
        self.events()
            .into_iter()
            .map(|event| event.evicted_key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> Clone for DiscardLog<K> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<K> Default for DiscardLog<K>
where
    K: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DiscardObserver<K> for DiscardLog<K>
where
    K: Clone + Send,
{
    fn on_discard(&self, event: &DiscardEvent<K>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

// == Channel Observer ==
/// Forwards discard events into an unbounded tokio channel.
///
/// Events are dropped silently once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelObserver<K> {
    tx: UnboundedSender<DiscardEvent<K>>,
}

impl<K> ChannelObserver<K> {
    pub fn new(tx: UnboundedSender<DiscardEvent<K>>) -> Self {
        Self { tx }
    }
}

impl<K> DiscardObserver<K> for ChannelObserver<K>
where
    K: Clone + Send,
{
    fn on_discard(&self, event: &DiscardEvent<K>) {
        let _ = self.tx.send(event.clone());
    }
}
