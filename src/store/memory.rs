//! In-process document store running on a dedicated backend thread.
//!
//! The backend thread hosts a Tokio runtime and owns all collections and
//! listeners. Commands arrive on a Tokio channel; snapshots and append results
//! leave on crossbeam channels for the UI thread to drain.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Sender};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

use super::{Completion, MessageStore, Subscription};
use crate::auth::AuthProvider;
use crate::error::StoreError;
use crate::message::{Document, Fields};
use crate::protocol::{AppendResult, SnapshotResult, StoreCommand};

#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Delay applied before each write, to mimic a remote round trip
    pub write_latency: Duration,
}

/// Handle to the in-process store. Clones share the same backend.
#[derive(Clone)]
pub struct MemoryStore {
    cmd_tx: UnboundedSender<StoreCommand>,
}

impl MemoryStore {
    /// Start the backend thread. Reads and writes require a signed-in user
    /// according to `auth`.
    pub fn spawn(auth: Arc<dyn AuthProvider>, options: StoreOptions) -> Self {
        let (cmd_tx, cmd_rx) = unbounded_channel::<StoreCommand>();

        let spawned = thread::Builder::new()
            .name("flash-chat-store".into())
            .spawn(move || run_backend(cmd_rx, auth, options));
        if let Err(e) = spawned {
            // Commands now fail on send and every caller sees `Unavailable`.
            tracing::error!(error = %e, "failed to spawn store thread");
        }

        Self { cmd_tx }
    }

    fn send(&self, command: StoreCommand) {
        if self.cmd_tx.send(command).is_err() {
            tracing::warn!("store backend is not running");
        }
    }
}

impl MessageStore for MemoryStore {
    fn subscribe_ordered(&self, collection: &str, order_by: &str) -> Subscription {
        let id = Uuid::new_v4();
        let (tx, rx) = unbounded::<SnapshotResult>();

        self.send(StoreCommand::Subscribe {
            id,
            collection: collection.to_string(),
            order_by: order_by.to_string(),
            tx,
        });

        let cmd_tx = self.cmd_tx.clone();
        Subscription::new(id, rx, move || {
            let _ = cmd_tx.send(StoreCommand::Unsubscribe(id));
        })
    }

    fn append(&self, collection: &str, fields: Fields) -> Completion {
        let (reply, completion) = Completion::channel();
        self.send(StoreCommand::Append {
            collection: collection.to_string(),
            fields,
            reply,
        });
        completion
    }
}

/// Run the store event loop on a tokio runtime
fn run_backend(
    mut cmd_rx: UnboundedReceiver<StoreCommand>,
    auth: Arc<dyn AuthProvider>,
    options: StoreOptions,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to create Tokio runtime");
            return;
        }
    };

    rt.block_on(async move {
        let mut backend = Backend::new(auth, options);
        while let Some(command) = cmd_rx.recv().await {
            backend.handle(command).await;
        }
        tracing::debug!("store backend stopped");
    });
}

struct Listener {
    collection: String,
    order_by: String,
    tx: Sender<SnapshotResult>,
}

struct Backend {
    auth: Arc<dyn AuthProvider>,
    options: StoreOptions,
    collections: HashMap<String, Vec<Document>>,
    listeners: HashMap<Uuid, Listener>,
}

impl Backend {
    fn new(auth: Arc<dyn AuthProvider>, options: StoreOptions) -> Self {
        Self {
            auth,
            options,
            collections: HashMap::new(),
            listeners: HashMap::new(),
        }
    }

    /// Reads and writes are open to any signed-in user.
    fn authorize(&self) -> Result<(), StoreError> {
        match self.auth.current_user() {
            Some(_) => Ok(()),
            None => Err(StoreError::PermissionDenied),
        }
    }

    async fn handle(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::Subscribe {
                id,
                collection,
                order_by,
                tx,
            } => {
                if let Err(e) = self.authorize() {
                    tracing::warn!(%collection, error = %e, "subscription denied");
                    let _ = tx.send(Err(e));
                    return;
                }
                let snapshot = self.snapshot(&collection, &order_by);
                if tx.send(Ok(snapshot)).is_ok() {
                    tracing::debug!(%id, %collection, "listener added");
                    self.listeners.insert(
                        id,
                        Listener {
                            collection,
                            order_by,
                            tx,
                        },
                    );
                }
            }

            StoreCommand::Unsubscribe(id) => {
                if self.listeners.remove(&id).is_some() {
                    tracing::debug!(%id, "listener removed");
                }
            }

            StoreCommand::Append {
                collection,
                fields,
                reply,
            } => {
                if !self.options.write_latency.is_zero() {
                    tokio::time::sleep(self.options.write_latency).await;
                }
                let result = self.append(&collection, fields);
                let _ = reply.send(result);
            }
        }
    }

    fn append(&mut self, collection: &str, fields: Fields) -> AppendResult {
        self.authorize()?;
        let document = Document::new(fields);
        tracing::debug!(id = %document.id, %collection, "document appended");
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        self.broadcast(collection);
        Ok(())
    }

    /// Deliver the full ordered snapshot to every listener on `collection`.
    fn broadcast(&mut self, collection: &str) {
        let mut gone = Vec::new();
        for (id, listener) in &self.listeners {
            if listener.collection != collection {
                continue;
            }
            let snapshot = self.snapshot(collection, &listener.order_by);
            if listener.tx.send(Ok(snapshot)).is_err() {
                gone.push(*id);
            }
        }
        for id in gone {
            self.listeners.remove(&id);
        }
    }

    /// Documents with a numeric `order_by` field, ascending; ties keep
    /// insertion order.
    fn snapshot(&self, collection: &str, order_by: &str) -> Vec<Document> {
        let Some(documents) = self.collections.get(collection) else {
            return Vec::new();
        };
        let mut keyed: Vec<(f64, &Document)> = documents
            .iter()
            .filter_map(|doc| doc.number(order_by).map(|key| (key, doc)))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, doc)| doc.clone()).collect()
    }
}
