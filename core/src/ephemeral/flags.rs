//! Keyed flag controller with timed reversion
//!
//! Marks named flags active for a bounded window and reverts them
//! automatically. Keys are fully independent: any number of flags can be
//! active at once, each with its own deactivation timer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Errors from triggering a flag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// Negative delays are a caller bug, not a runtime condition.
    #[error("invalid trigger delay: {0}ms")]
    InvalidDuration(i64),
}

/// Runtime state for one key.
///
/// Created implicitly on first trigger and kept for the life of the
/// controller, oscillating between active and inactive.
#[derive(Debug, Default)]
struct KeyState {
    active: bool,
    /// Generation of the most recent trigger or cancel for this key.
    /// A deactivation timer only applies if its captured epoch is still
    /// current, so superseded timers can never flip the flag back.
    epoch: u64,
    /// Pending deactivation, exclusively owned. Aborted and replaced
    /// whenever the key is re-triggered or cancelled.
    timer: Option<JoinHandle<()>>,
}

/// Shared flag table behind the controller handle.
#[derive(Debug, Default)]
struct FlagTable {
    keys: HashMap<String, KeyState>,
    /// Monotonic epoch counter, shared across keys so an epoch value is
    /// never reused even after `clear()` drops and recreates entries.
    next_epoch: u64,
}

impl FlagTable {
    fn issue_epoch(&mut self) -> u64 {
        self.next_epoch += 1;
        self.next_epoch
    }
}

/// Controller for short-lived, keyed UI flags.
///
/// Cloning yields another handle to the same flag table, so deactivation
/// timers and the owning view context always observe one state. Reads are
/// pull-based: the view layer re-reads [`is_active`](Self::is_active) after
/// every dispatched intent.
///
/// `trigger` must be called from within a Tokio runtime; the deactivation
/// is a spawned task, never a blocking wait.
#[derive(Debug, Clone, Default)]
pub struct EphemeralFlags {
    inner: Arc<Mutex<FlagTable>>,
}

impl EphemeralFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the table, recovering from poison (no lock is held across awaits,
    /// so a panicked holder cannot leave the table mid-mutation).
    fn lock(&self) -> MutexGuard<'_, FlagTable> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Mark `key` active and schedule its deactivation after `delay`.
    ///
    /// Re-triggering an active key restarts the window: the pending timer is
    /// aborted and replaced, it never stacks. A zero delay is valid and
    /// reverts the flag as soon as the scheduler runs the timer.
    pub fn trigger(&self, key: &str, delay: Duration) -> Result<(), TriggerError> {
        // to_std rejects negative durations; fail fast before touching state
        let sleep_for = delay
            .to_std()
            .map_err(|_| TriggerError::InvalidDuration(delay.num_milliseconds()))?;

        let mut table = self.lock();
        let epoch = table.issue_epoch();
        let entry = table.keys.entry(key.to_string()).or_default();

        if let Some(timer) = entry.timer.take() {
            timer.abort();
        }
        entry.active = true;
        entry.epoch = epoch;

        tracing::debug!(key, delay_ms = delay.num_milliseconds(), "flag triggered");

        let shared = Arc::clone(&self.inner);
        let owned_key = key.to_string();
        entry.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(sleep_for).await;
            let mut table = shared.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(entry) = table.keys.get_mut(&owned_key) {
                // A later trigger or cancel supersedes this epoch
                if entry.epoch == epoch {
                    entry.active = false;
                    entry.timer = None;
                    tracing::debug!(key = owned_key.as_str(), "flag expired");
                }
            }
        }));

        Ok(())
    }

    /// Deactivate `key` immediately and abort its pending timer.
    /// No-op if the key is unknown or already inactive.
    pub fn cancel(&self, key: &str) {
        let mut table = self.lock();
        let epoch = table.issue_epoch();
        if let Some(entry) = table.keys.get_mut(key) {
            if let Some(timer) = entry.timer.take() {
                timer.abort();
            }
            entry.active = false;
            entry.epoch = epoch;
            tracing::debug!(key, "flag cancelled");
        }
    }

    /// Current state of `key`. Pure read; unknown keys are inactive.
    pub fn is_active(&self, key: &str) -> bool {
        self.lock().keys.get(key).is_some_and(|e| e.active)
    }

    /// Whether the key has ever been triggered on this controller.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().keys.contains_key(key)
    }

    /// Keys that are currently active, for rendering.
    pub fn active_keys(&self) -> Vec<String> {
        self.lock()
            .keys
            .iter()
            .filter_map(|(k, e)| e.active.then(|| k.clone()))
            .collect()
    }

    /// Number of currently active keys.
    pub fn active_count(&self) -> usize {
        self.lock().keys.values().filter(|e| e.active).count()
    }

    /// Teardown: abort every pending timer and drop all entries so no
    /// scheduled work outlives the controller's useful life.
    pub fn clear(&self) {
        let mut table = self.lock();
        for (_, entry) in table.keys.drain() {
            if let Some(timer) = entry.timer {
                timer.abort();
            }
        }
        tracing::debug!("flags cleared");
    }
}
