//! Cache backend trait and the in-memory implementation.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use posbot_error::{CacheError, CacheErrorKind, PosbotResult};
use std::collections::HashMap;

/// Blob store with per-key expiry and simple counters.
///
/// The contract matches a redis-style backend: atomic per-key get/set with
/// expiry, INCR for counters, prefix scan for stats display. No cross-key
/// transactions; each entry is independently consistent, which is all the
/// shared scheduler/command access pattern needs.
pub trait CacheBackend: Send + Sync {
    /// Get a stored blob.
    ///
    /// Returns `Ok(None)` both when the key is absent and when it is present
    /// but expired; callers cannot distinguish the two.
    fn get(&self, key: &str) -> PosbotResult<Option<Vec<u8>>>;

    /// Store a blob until `valid_until`.
    ///
    /// Setting a value whose expiry is at or before the current time is a
    /// no-op: the store never holds entries with non-positive remaining
    /// lifetime.
    fn set(&self, key: &str, value: Vec<u8>, valid_until: DateTime<Utc>) -> PosbotResult<()>;

    /// Increment a counter, returning the new value. Counters do not expire.
    fn incr(&self, key: &str) -> PosbotResult<u64>;

    /// List unexpired keys starting with `prefix`. Stats display only.
    fn scan(&self, prefix: &str) -> PosbotResult<Vec<String>>;
}

#[derive(Debug, Clone)]
struct Entry {
    data: Vec<u8>,
    // None for counters, which never expire
    valid_until: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.valid_until {
            Some(valid_until) => now >= valid_until,
            None => false,
        }
    }
}

/// In-process cache backend.
///
/// A single mutex guards the map; per-key atomicity is trivially satisfied.
/// The deployment model is one bot instance with a volatile cache, so there
/// is no persistence and no eviction beyond expiry.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries, for stats display.
    pub fn len(&self) -> usize {
        let now = Utc::now();
        self.entries
            .lock()
            .values()
            .filter(|e| !e.is_expired(now))
            .count()
    }

    /// Whether the store holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheBackend for MemoryBackend {
    fn get(&self, key: &str) -> PosbotResult<Option<Vec<u8>>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired(Utc::now()) => {
                tracing::debug!(key, "Cache entry expired, removing");
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.data.clone())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: Vec<u8>, valid_until: DateTime<Utc>) -> PosbotResult<()> {
        let now = Utc::now();
        if valid_until <= now {
            tracing::debug!(
                key,
                %valid_until,
                "Entry already expired, not caching"
            );
            return Ok(());
        }

        self.entries.lock().insert(
            key.to_string(),
            Entry {
                data: value,
                valid_until: Some(valid_until),
            },
        );
        Ok(())
    }

    fn incr(&self, key: &str) -> PosbotResult<u64> {
        let mut entries = self.entries.lock();
        let current = match entries.get(key) {
            Some(entry) => std::str::from_utf8(&entry.data)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| {
                    CacheError::new(CacheErrorKind::Backend(format!(
                        "counter {} holds a non-numeric value",
                        key
                    )))
                })?,
            None => 0,
        };

        let next = current + 1;
        entries.insert(
            key.to_string(),
            Entry {
                data: next.to_string().into_bytes(),
                valid_until: None,
            },
        );
        Ok(next)
    }

    fn scan(&self, prefix: &str) -> PosbotResult<Vec<String>> {
        let now = Utc::now();
        let entries = self.entries.lock();
        Ok(entries
            .iter()
            .filter(|(key, entry)| key.starts_with(prefix) && !entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect())
    }
}
