//! Test doubles for the store and identity collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Sender};
use parking_lot::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use uuid::Uuid;

use crate::auth::AuthProvider;
use crate::error::AuthError;
use crate::message::Fields;
use crate::protocol::{AppendResult, SnapshotResult};
use crate::store::{Completion, MessageStore, Subscription};

#[derive(Default)]
struct FakeStoreState {
    subscribers: Vec<Sender<SnapshotResult>>,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
    last_order_by: Option<String>,
    appends: Vec<(String, Fields)>,
    replies: Vec<Sender<AppendResult>>,
}

/// Store whose deliveries and append outcomes are driven by the test.
#[derive(Default)]
pub struct FakeStore {
    state: Arc<Mutex<FakeStoreState>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every open subscription.
    pub fn push(&self, event: SnapshotResult) {
        for tx in &self.state.lock().subscribers {
            let _ = tx.send(event.clone());
        }
    }

    /// Close every open subscription as if the store went away.
    pub fn close_subscriptions(&self) {
        self.state.lock().subscribers.clear();
    }

    /// Answer the oldest unanswered append.
    pub fn complete_next(&self, result: AppendResult) {
        let mut state = self.state.lock();
        if !state.replies.is_empty() {
            let reply = state.replies.remove(0);
            let _ = reply.send(result);
        }
    }

    pub fn appends(&self) -> Vec<(String, Fields)> {
        self.state.lock().appends.clone()
    }

    pub fn subscribe_count(&self) -> usize {
        self.state.lock().subscribe_calls
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.state.lock().unsubscribe_calls
    }

    pub fn last_order_by(&self) -> Option<String> {
        self.state.lock().last_order_by.clone()
    }
}

impl MessageStore for FakeStore {
    fn subscribe_ordered(&self, _collection: &str, order_by: &str) -> Subscription {
        let (tx, rx) = unbounded();
        {
            let mut state = self.state.lock();
            state.subscribers.push(tx);
            state.subscribe_calls += 1;
            state.last_order_by = Some(order_by.to_string());
        }
        let shared = self.state.clone();
        Subscription::new(Uuid::new_v4(), rx, move || {
            shared.lock().unsubscribe_calls += 1;
        })
    }

    fn append(&self, collection: &str, fields: Fields) -> Completion {
        let (reply, completion) = Completion::channel();
        let mut state = self.state.lock();
        state.appends.push((collection.to_string(), fields));
        state.replies.push(reply);
        completion
    }
}

/// Identity whose user and sign-out outcome are set by the test.
pub struct FakeAuth {
    user: Mutex<Option<String>>,
    sign_out_error: Mutex<Option<AuthError>>,
}

impl FakeAuth {
    pub fn new(user: Option<&str>) -> Self {
        Self {
            user: Mutex::new(user.map(str::to_string)),
            sign_out_error: Mutex::new(None),
        }
    }

    pub fn set_user(&self, user: Option<&str>) {
        *self.user.lock() = user.map(str::to_string);
    }

    /// Make every later sign-out fail with `error`.
    pub fn fail_sign_out(&self, error: AuthError) {
        *self.sign_out_error.lock() = Some(error);
    }
}

impl AuthProvider for FakeAuth {
    fn current_user(&self) -> Option<String> {
        self.user.lock().clone()
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(error) = self.sign_out_error.lock().clone() {
            return Err(error);
        }
        *self.user.lock() = None;
        Ok(())
    }
}

/// Poll `condition` until it holds or two seconds pass.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}

struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` on this thread and count the `error` events it logs.
pub fn count_errors<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, count.load(Ordering::SeqCst))
}
