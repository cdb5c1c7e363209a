//! Typed serde layer over the raw blob backend.

use crate::{CacheBackend, CacheKey};
use chrono::{DateTime, Utc};
use posbot_error::{CacheError, CacheErrorKind, PosbotResult};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Typed read/write access to the cache backend.
///
/// Values are serialized to JSON before storage, so a value only becomes
/// visible after a complete serialize+store; a failed encode never leaves a
/// partial write behind. Callers always receive decoded copies, never
/// references into the store.
#[derive(Clone)]
pub struct TypedCache {
    backend: Arc<dyn CacheBackend>,
}

impl TypedCache {
    /// Wrap a backend.
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// The underlying backend, shared with counters and the notification store.
    pub fn backend(&self) -> Arc<dyn CacheBackend> {
        Arc::clone(&self.backend)
    }

    /// Get and decode a cached value. `Ok(None)` on absent or expired.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> PosbotResult<Option<T>> {
        let encoded = key.encode();
        match self.backend.get(&encoded)? {
            Some(blob) => {
                let value = serde_json::from_slice(&blob).map_err(|e| {
                    CacheError::new(CacheErrorKind::Decode(format!("{}: {}", encoded, e)))
                })?;
                tracing::debug!(key = %encoded, "Cache hit");
                Ok(Some(value))
            }
            None => {
                tracing::debug!(key = %encoded, "Cache miss");
                Ok(None)
            }
        }
    }

    /// Encode and store a value until `valid_until`.
    ///
    /// Expiries at or before the current time are dropped by the backend.
    pub fn set<T: Serialize>(
        &self,
        key: &CacheKey,
        value: &T,
        valid_until: DateTime<Utc>,
    ) -> PosbotResult<()> {
        let encoded = key.encode();
        let blob = serde_json::to_vec(value).map_err(|e| {
            CacheError::new(CacheErrorKind::Encode(format!("{}: {}", encoded, e)))
        })?;
        self.backend.set(&encoded, blob, valid_until)?;
        tracing::debug!(key = %encoded, %valid_until, "Cached value");
        Ok(())
    }
}
