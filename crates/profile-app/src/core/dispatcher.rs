//! Dispatch seam between the profile core and whatever fulfills intents.

use super::intent::ProfileIntent;
use parking_lot::Mutex;
use std::sync::Arc;

/// Receives intents forwarded by the profile core.
///
/// Implementations enqueue and return; the core never observes the result.
pub trait IntentDispatcher: Send + Sync {
    /// Forward one intent.
    fn dispatch(&self, intent: ProfileIntent);
}

impl<F> IntentDispatcher for F
where
    F: Fn(ProfileIntent) + Send + Sync,
{
    fn dispatch(&self, intent: ProfileIntent) {
        self(intent);
    }
}

/// Dispatcher that records every intent in order instead of forwarding it.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    dispatched: Arc<Mutex<Vec<ProfileIntent>>>,
}

impl RecordingDispatcher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intents recorded so far.
    pub fn dispatched(&self) -> Vec<ProfileIntent> {
        self.dispatched.lock().clone()
    }

    /// Drain the recorded intents.
    pub fn take(&self) -> Vec<ProfileIntent> {
        std::mem::take(&mut *self.dispatched.lock())
    }

    /// Whether nothing has been recorded since the last drain
    pub fn is_empty(&self) -> bool {
        self.dispatched.lock().is_empty()
    }
}

impl IntentDispatcher for RecordingDispatcher {
    fn dispatch(&self, intent: ProfileIntent) {
        self.dispatched.lock().push(intent);
    }
}
