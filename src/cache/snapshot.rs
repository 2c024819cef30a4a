//! Single-value cache with TTL (Time To Live) support.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Snapshot<V> {
    value: V,
    taken_at: Instant,
}

/// A thread-safe holder for one value that expires after a fixed TTL.
///
/// Clones share the same slot. A TTL of zero disables caching: every
/// `get()` misses.
///
/// Wrap large values in `Arc` so that `get()` stays cheap:
/// ```
/// use contacts_mcp_server::cache::TimedSnapshot;
/// use std::sync::Arc;
///
/// let snapshot = TimedSnapshot::new(60);
/// snapshot.set(Arc::new(vec!["Alice".to_string()]));
/// assert_eq!(snapshot.get().map(|names| names.len()), Some(1));
/// ```
#[derive(Clone)]
pub struct TimedSnapshot<V: Clone> {
    slot: Arc<RwLock<Option<Snapshot<V>>>>,
    ttl: Duration,
}

impl<V: Clone> TimedSnapshot<V> {
    /// Create an empty snapshot with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Replace the held value and restart its TTL.
    pub fn set(&self, value: V) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(Snapshot {
                value,
                taken_at: Instant::now(),
            });
        }
    }

    /// Get the held value if one is present and younger than the TTL.
    pub fn get(&self) -> Option<V> {
        let now = Instant::now();

        if let Ok(slot) = self.slot.read() {
            if let Some(snapshot) = slot.as_ref() {
                if now.duration_since(snapshot.taken_at) < self.ttl {
                    return Some(snapshot.value.clone());
                }
            }
        }

        None
    }

    /// Drop the held value so the next `get()` misses.
    pub fn invalidate(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    /// Get the TTL duration for this snapshot.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone> std::fmt::Debug for TimedSnapshot<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fresh = self.get().is_some();
        f.debug_struct("TimedSnapshot")
            .field("ttl", &self.ttl)
            .field("fresh", &fresh)
            .finish()
    }
}
