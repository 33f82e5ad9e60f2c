//! Error types for the store, identity and record layers.

/// Failures reported by a message store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The access rule rejected the request (no signed-in user).
    #[error("permission denied: sign in required")]
    PermissionDenied,

    /// The store backend stopped or never started.
    #[error("store unavailable")]
    Unavailable,

    /// Any other backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failures reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("weak password: {0}")]
    WeakPassword(String),

    #[error("email already in use: {0}")]
    EmailInUse(String),

    #[error("wrong email or password")]
    WrongCredentials,

    #[error("sign out failed: {0}")]
    SignOut(String),
}

/// A stored document that does not match the record schema.
#[derive(Debug, thiserror::Error)]
#[error("malformed record {id}: {source}")]
pub struct RecordError {
    pub id: uuid::Uuid,
    #[source]
    pub source: serde_json::Error,
}
