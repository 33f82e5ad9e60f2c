//! Message store client.
//!
//! - `MessageStore`: the seam the feed talks to
//! - `Subscription`: a live, non-restartable sequence of full snapshots
//! - `Completion`: the one-shot outcome of an append
//! - `memory`: the in-process store running on its own backend thread
//!
//! Results always travel back over crossbeam channels, so whoever drains them
//! (the UI thread) is the only place they are applied.

mod memory;

pub use memory::{MemoryStore, StoreOptions};

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use uuid::Uuid;

use crate::error::StoreError;
use crate::message::Fields;
use crate::protocol::{AppendResult, SnapshotResult};

/// A document store that supports ordered live subscriptions and appends.
pub trait MessageStore: Send + Sync {
    /// Open a live subscription to `collection`, ordered ascending by `order_by`.
    ///
    /// Every change in the collection delivers the complete ordered snapshot
    /// again. The first snapshot arrives right after subscribing.
    fn subscribe_ordered(&self, collection: &str, order_by: &str) -> Subscription;

    /// Append one document. The result is reported once through the returned
    /// completion. No retry and no deduplication.
    fn append(&self, collection: &str, fields: Fields) -> Completion;
}

type CancelFn = Box<dyn FnOnce() + Send>;

/// Handle to a live subscription.
///
/// Once unsubscribed (explicitly, by drop, or because the store went away) it
/// never yields again.
pub struct Subscription {
    id: Uuid,
    rx: Receiver<SnapshotResult>,
    cancel: Option<CancelFn>,
    closed: bool,
}

impl Subscription {
    pub fn new(
        id: Uuid,
        rx: Receiver<SnapshotResult>,
        cancel: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            id,
            rx,
            cancel: Some(Box::new(cancel)),
            closed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Next pending event without blocking.
    pub fn try_next(&mut self) -> Option<SnapshotResult> {
        if self.closed {
            return None;
        }
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.store_gone()),
        }
    }

    /// Next event, waiting up to `timeout`.
    pub fn next_timeout(&mut self, timeout: Duration) -> Option<SnapshotResult> {
        if self.closed {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(self.store_gone()),
        }
    }

    /// Stop the subscription. Pending events are discarded.
    pub fn unsubscribe(&mut self) {
        self.closed = true;
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    fn store_gone(&mut self) -> SnapshotResult {
        self.unsubscribe();
        Err(StoreError::Unavailable)
    }
}

impl Iterator for Subscription {
    type Item = SnapshotResult;

    /// Blocks until the next event; ends once the subscription is closed.
    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        match self.rx.recv() {
            Ok(event) => Some(event),
            Err(_) => Some(self.store_gone()),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("closed", &self.closed)
            .finish()
    }
}

/// One-shot result of an append.
#[derive(Debug)]
pub struct Completion {
    rx: Receiver<AppendResult>,
}

impl Completion {
    /// Create a completion and the sender the store answers on.
    pub fn channel() -> (Sender<AppendResult>, Completion) {
        let (tx, rx) = bounded(1);
        (tx, Completion { rx })
    }

    /// The result, if the store has answered.
    pub fn try_take(&self) -> Option<AppendResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(StoreError::Unavailable)),
        }
    }

    /// Wait up to `timeout` for the result.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<AppendResult> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(StoreError::Unavailable)),
        }
    }
}
