//! Append-only status message log shown to the user.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Accepts short, human-readable status notifications.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: impl Into<String>);
}

/// Shared in-memory message log. Clones are handles onto the same log.
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message added so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageSink for MessageService {
    fn add(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "message added");
        self.lock().push(message);
    }
}
