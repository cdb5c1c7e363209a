//! Severity-aware notification de-duplication.

use chrono::{Duration, Utc};
use posbot_cache::{CacheBackend, CacheKey};
use posbot_core::Severity;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

fn default_cooldown_secs() -> i64 {
    3600
}

/// Cool-down windows for sent notifications, per severity.
///
/// The windows are independent: a critical alert is never suppressed by an
/// active warning window, and re-recording at critical uses the critical
/// window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a warning notification suppresses repeats
    #[serde(default = "default_cooldown_secs")]
    pub warning_cooldown_secs: i64,
    /// Seconds a critical notification suppresses repeats
    #[serde(default = "default_cooldown_secs")]
    pub critical_cooldown_secs: i64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            warning_cooldown_secs: default_cooldown_secs(),
            critical_cooldown_secs: default_cooldown_secs(),
        }
    }
}

/// Tracks which alerts have already been sent.
///
/// One record per (starbase, fuel type) pair, holding the numeric severity
/// last notified at and expiring with that severity's cool-down. The store
/// is shared with the cache backend; each record is independently
/// consistent.
#[derive(Clone)]
pub struct NotificationTracker {
    backend: Arc<dyn CacheBackend>,
    config: NotificationConfig,
}

impl NotificationTracker {
    /// Create a tracker over a backend.
    pub fn new(backend: Arc<dyn CacheBackend>, config: NotificationConfig) -> Self {
        Self { backend, config }
    }

    fn cooldown(&self, severity: Severity) -> Duration {
        let secs = match severity {
            Severity::Critical => self.config.critical_cooldown_secs,
            _ => self.config.warning_cooldown_secs,
        };
        Duration::seconds(secs.max(1))
    }

    fn record(&self, starbase_id: i64, fuel_type_id: i32, severity: Severity) {
        let key = CacheKey::Notification {
            starbase_id,
            fuel_type_id,
        }
        .encode();
        let expires = Utc::now() + self.cooldown(severity);
        if let Err(e) = self
            .backend
            .set(&key, severity.as_u8().to_string().into_bytes(), expires)
        {
            warn!(
                starbase_id,
                fuel_type_id,
                %severity,
                error = %e,
                "Failed to record notification"
            );
        }
    }

    /// Decide whether an alert at `severity` should be sent, recording the
    /// decision when it should.
    ///
    /// True when no unexpired record exists for the pair, or when the
    /// existing record's severity is lower than the requested one
    /// (escalation). A store read failure fails open: over-notification
    /// beats silently suppressing a critical alert.
    pub fn should_notify(&self, starbase_id: i64, fuel_type_id: i32, severity: Severity) -> bool {
        let key = CacheKey::Notification {
            starbase_id,
            fuel_type_id,
        }
        .encode();

        let existing = match self.backend.get(&key) {
            Ok(Some(blob)) => std::str::from_utf8(&blob)
                .ok()
                .and_then(|s| s.parse::<u8>().ok())
                .and_then(Severity::from_u8),
            Ok(None) => None,
            Err(e) => {
                warn!(
                    starbase_id,
                    fuel_type_id,
                    error = %e,
                    "Failed to check notification record, failing open"
                );
                self.record(starbase_id, fuel_type_id, severity);
                return true;
            }
        };

        match existing {
            None => {
                self.record(starbase_id, fuel_type_id, severity);
                true
            }
            Some(sent) if sent < severity => {
                debug!(
                    starbase_id,
                    fuel_type_id,
                    from = %sent,
                    to = %severity,
                    "Escalating notification"
                );
                self.record(starbase_id, fuel_type_id, severity);
                true
            }
            Some(_) => false,
        }
    }
}
