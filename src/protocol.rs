use crossbeam_channel::Sender;
use uuid::Uuid;

use crate::error::StoreError;
use crate::message::{Document, Fields};

/// One delivery from a live subscription: a full ordered snapshot or a read error
pub type SnapshotResult = Result<Vec<Document>, StoreError>;

/// Outcome of a single append
pub type AppendResult = Result<(), StoreError>;

/// Commands sent from the UI side to the store backend
#[derive(Debug)]
pub enum StoreCommand {
    /// Start a live ordered subscription on a collection
    Subscribe {
        id: Uuid,
        collection: String,
        order_by: String,
        tx: Sender<SnapshotResult>,
    },
    /// Stop delivering to a subscription
    Unsubscribe(Uuid),
    /// Write a new document
    Append {
        collection: String,
        fields: Fields,
        reply: Sender<AppendResult>,
    },
}
