//! Thread-shareable handle around a single [`MessageFilter`].
//!
//! `MessageFilter` has no interior locking. When one instance serves several
//! threads, every read and write goes through one exclusive lock here.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::FilterError;
use crate::filter::{MessageFilter, Verdict};

#[derive(Debug, Clone, Default)]
pub struct SharedFilter {
    inner: Arc<Mutex<MessageFilter>>,
}

impl SharedFilter {
    pub fn new(filter: MessageFilter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(filter)),
        }
    }

    // Every mutation is a single set insert/remove, so a poisoned guard still
    // holds a consistent set.
    fn lock(&self) -> MutexGuard<'_, MessageFilter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn ban(&self, word: impl AsRef<[u8]>) -> Result<(), FilterError> {
        self.lock().ban(word)
    }

    pub fn unban(&self, word: impl AsRef<[u8]>) -> Result<(), FilterError> {
        self.lock().unban(word)
    }

    pub fn check(&self, message: impl AsRef<[u8]>) -> bool {
        self.lock().check(message)
    }

    pub fn evaluate(&self, message: impl AsRef<[u8]>) -> Verdict {
        self.lock().evaluate(message)
    }

    pub fn banned_words(&self) -> Vec<String> {
        self.lock().banned_words()
    }

    /// Run `f` with the lock held, for multi-step updates that must not interleave.
    pub fn with<R>(&self, f: impl FnOnce(&mut MessageFilter) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<MessageFilter> for SharedFilter {
    fn from(filter: MessageFilter) -> Self {
        Self::new(filter)
    }
}
