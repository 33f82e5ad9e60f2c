//! Feed presenter: the chat screen's state, separated from egui.
//!
//! `FeedPresenter` owns the ordered message list and the input text. It opens
//! the live subscription, applies snapshots and append results when the UI
//! thread calls `process_events`, and maps each message to a bubble variant.
//! Views receive it as a parameter and never talk to the store directly.

use std::sync::Arc;

use chrono::Utc;

use crate::auth::AuthProvider;
use crate::config::store::DATE_FIELD;
use crate::message::{decode_snapshot, Message, Record};
use crate::protocol::{AppendResult, SnapshotResult};
use crate::store::{Completion, MessageStore, Subscription};

/// Lifecycle of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// No subscription open.
    Idle,
    /// Subscription open, no snapshot applied yet.
    Subscribed,
    /// At least one snapshot applied.
    SubscribedWithData,
}

/// Which of the two row styles a message gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleVariant {
    /// Sent by the signed-in user.
    Mine,
    /// Sent by anyone else.
    Theirs,
}

/// One rendered row of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub text: &'a str,
    pub sender: &'a str,
    pub variant: BubbleVariant,
}

/// Where the app should go after a logout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    ToWelcome,
}

/// Style choice for a message given the current identity.
pub fn bubble_variant(message: &Message, current_user: Option<&str>) -> BubbleVariant {
    match current_user {
        Some(user) if message.sender == user => BubbleVariant::Mine,
        _ => BubbleVariant::Theirs,
    }
}

/// Seconds since the Unix epoch, with sub-second precision.
fn now_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

pub struct FeedPresenter {
    store: Arc<dyn MessageStore>,
    auth: Arc<dyn AuthProvider>,
    collection: String,
    state: FeedState,
    messages: Vec<Message>,
    subscription: Option<Subscription>,
    pending_appends: Vec<Completion>,
    scroll_pending: bool,

    /// Text being composed in the input field
    pub input: String,
}

impl FeedPresenter {
    pub fn new(
        store: Arc<dyn MessageStore>,
        auth: Arc<dyn AuthProvider>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            auth,
            collection: collection.into(),
            state: FeedState::Idle,
            messages: Vec::new(),
            subscription: None,
            pending_appends: Vec::new(),
            scroll_pending: false,
            input: String::new(),
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn current_user(&self) -> Option<String> {
        self.auth.current_user()
    }

    /// Open the live subscription. Does nothing if already active.
    pub fn activate(&mut self) {
        if self.state != FeedState::Idle {
            return;
        }
        let subscription = self.store.subscribe_ordered(&self.collection, DATE_FIELD);
        tracing::info!(collection = %self.collection, id = %subscription.id(), "feed subscribed");
        self.subscription = Some(subscription);
        self.state = FeedState::Subscribed;
    }

    /// Close the subscription and forget everything shown.
    pub fn deactivate(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::info!(id = %subscription.id(), "feed unsubscribed");
        }
        for completion in self.pending_appends.drain(..) {
            match completion.try_take() {
                Some(Err(e)) => tracing::error!(error = %e, "failed to save message"),
                Some(Ok(())) => {}
                None => tracing::debug!("left before the store answered an append"),
            }
        }
        self.messages.clear();
        self.input.clear();
        self.scroll_pending = false;
        self.state = FeedState::Idle;
    }

    /// Apply everything the store delivered since the last call.
    ///
    /// Must run on the UI thread. Returns true if anything visible changed.
    pub fn process_events(&mut self) -> bool {
        let mut changed = false;

        let events: Vec<SnapshotResult> = match self.subscription.as_mut() {
            Some(subscription) => std::iter::from_fn(|| subscription.try_next()).collect(),
            None => Vec::new(),
        };
        for event in events {
            changed |= self.apply_snapshot(event);
        }

        // A subscription the store closed never yields again; go back to Idle
        // so the next activate opens a fresh one.
        if self.subscription.as_ref().is_some_and(Subscription::is_closed) {
            self.subscription = None;
            self.state = FeedState::Idle;
            tracing::warn!("feed subscription closed by the store");
            changed = true;
        }

        for completion in std::mem::take(&mut self.pending_appends) {
            match completion.try_take() {
                Some(result) => changed |= self.finish_append(result),
                None => self.pending_appends.push(completion),
            }
        }

        changed
    }

    /// Replace the list with a delivered snapshot; errors leave it untouched.
    pub fn apply_snapshot(&mut self, event: SnapshotResult) -> bool {
        if self.state == FeedState::Idle {
            return false;
        }
        match event {
            Ok(documents) => {
                self.messages = decode_snapshot(&documents);
                self.state = FeedState::SubscribedWithData;
                self.scroll_pending = true;
                tracing::debug!(count = self.messages.len(), "snapshot applied");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read messages");
                false
            }
        }
    }

    fn finish_append(&mut self, result: AppendResult) -> bool {
        match result {
            Ok(()) => {
                tracing::debug!("message saved");
                self.input.clear();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save message");
                false
            }
        }
    }

    /// Send the input as a new message from the current user.
    ///
    /// Returns false without touching the store when the input is empty or no
    /// one is signed in.
    pub fn submit(&mut self) -> bool {
        if self.input.is_empty() {
            return false;
        }
        let Some(sender) = self.auth.current_user() else {
            tracing::debug!("submit ignored: no signed-in user");
            return false;
        };

        let record = Record::new(sender, self.input.clone(), now_seconds());
        let completion = self.store.append(&self.collection, record.to_fields());
        self.pending_appends.push(completion);
        true
    }

    /// Appends still waiting for the store to answer.
    pub fn pending_appends(&self) -> usize {
        self.pending_appends.len()
    }

    /// Sign out and leave the chat screen; on failure stay put.
    pub fn logout(&mut self) -> Navigation {
        match self.auth.sign_out() {
            Ok(()) => {
                self.deactivate();
                Navigation::ToWelcome
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to sign out");
                Navigation::Stay
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.messages.len()
    }

    /// Row `index` styled for the current user.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        let current = self.auth.current_user();
        self.messages
            .get(index)
            .map(|message| Self::to_row(message, current.as_deref()))
    }

    /// All rows, in list order.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let current = self.auth.current_user();
        self.messages
            .iter()
            .map(|message| Self::to_row(message, current.as_deref()))
            .collect()
    }

    fn to_row<'a>(message: &'a Message, current: Option<&str>) -> Row<'a> {
        Row {
            text: &message.body,
            sender: &message.sender,
            variant: bubble_variant(message, current),
        }
    }

    /// Whether the view should scroll to the last row. The request is
    /// consumed; the view scrolls only once this frame's rows are laid out.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
