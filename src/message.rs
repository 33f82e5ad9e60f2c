//! Message and record types for the feed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::store::{BODY_FIELD, DATE_FIELD, SENDER_FIELD};
use crate::error::RecordError;

/// Dynamically-typed document fields as held by the store.
pub type Fields = Map<String, Value>;

/// A chat message as shown in the feed. List position is its only key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub body: String,
}

impl Message {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
        }
    }
}

/// A persisted feed record. `sent_at` is seconds since the Unix epoch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub sender: String,
    pub body: String,
    #[serde(rename = "sentAt")]
    pub sent_at: f64,
}

impl Record {
    pub fn new(sender: impl Into<String>, body: impl Into<String>, sent_at: f64) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            sent_at,
        }
    }

    /// Shape this record as store fields.
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(SENDER_FIELD.into(), Value::from(self.sender.clone()));
        fields.insert(BODY_FIELD.into(), Value::from(self.body.clone()));
        fields.insert(DATE_FIELD.into(), Value::from(self.sent_at));
        fields
    }
}

impl From<Record> for Message {
    fn from(record: Record) -> Self {
        Self {
            sender: record.sender,
            body: record.body,
        }
    }
}

/// A stored document: generated id plus its fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub fields: Fields,
}

impl Document {
    pub fn new(fields: Fields) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }

    /// Numeric value of `field`, if present.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }

    /// Decode this document against the record schema.
    pub fn decode(&self) -> Result<Record, RecordError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|source| RecordError {
            id: self.id,
            source,
        })
    }
}

/// Decode a snapshot into messages, skipping documents that fail the schema.
pub fn decode_snapshot(documents: &[Document]) -> Vec<Message> {
    documents
        .iter()
        .filter_map(|doc| match doc.decode() {
            Ok(record) => Some(Message::from(record)),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}
