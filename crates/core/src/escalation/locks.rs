//! Per-tappal serialization point
//!
//! Two escalate/reassign actions on the same tappal must not interleave their
//! movement and assignment writes, otherwise the last PUT silently wins.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Async mutexes keyed by tappal id.
///
/// An entry lives only while someone holds or waits on it.
#[derive(Debug, Default, Clone)]
pub struct TappalLocks {
    inner: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl TappalLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `tappal_id`.
    pub async fn acquire(&self, tappal_id: &str) -> TappalGuard {
        // the map shard guard must be released before awaiting
        let mutex = self.inner.entry(tappal_id.to_string()).or_default().clone();
        let guard = mutex.lock_owned().await;
        TappalGuard { guard: Some(guard), tappal_id: tappal_id.to_string(), locks: Arc::clone(&self.inner) }
    }

    /// Number of tappals currently held or waited on.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Exclusive access to one tappal; releasing it drops the map entry when no
/// other task is waiting.
#[derive(Debug)]
pub struct TappalGuard {
    guard: Option<OwnedMutexGuard<()>>,
    tappal_id: String,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl Drop for TappalGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // waiters hold a clone of the Arc, so a count of 1 means only the map is left
        self.locks.remove_if(&self.tappal_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
