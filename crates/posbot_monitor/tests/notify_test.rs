//! Tests for severity-aware notification de-duplication.

use posbot_cache::MemoryBackend;
use posbot_core::Severity;
use posbot_monitor::{NotificationConfig, NotificationTracker};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

fn tracker(warning_secs: i64, critical_secs: i64) -> NotificationTracker {
    NotificationTracker::new(
        Arc::new(MemoryBackend::new()),
        NotificationConfig {
            warning_cooldown_secs: warning_secs,
            critical_cooldown_secs: critical_secs,
        },
    )
}

#[test]
fn test_first_notification_fires() {
    let tracker = tracker(3600, 3600);
    assert!(tracker.should_notify(101, 4051, Severity::Warning));
}

#[test]
fn test_repeat_at_same_severity_is_suppressed() {
    let tracker = tracker(3600, 3600);

    assert!(tracker.should_notify(101, 4051, Severity::Warning));
    assert!(!tracker.should_notify(101, 4051, Severity::Warning));
}

#[test]
fn test_escalation_bypasses_warning_cooldown() {
    let tracker = tracker(3600, 3600);

    assert!(tracker.should_notify(101, 4051, Severity::Warning));
    assert!(!tracker.should_notify(101, 4051, Severity::Warning));
    assert!(tracker.should_notify(101, 4051, Severity::Critical));
    assert!(!tracker.should_notify(101, 4051, Severity::Critical));
}

#[test]
fn test_warning_is_suppressed_while_critical_window_active() {
    let tracker = tracker(3600, 3600);

    assert!(tracker.should_notify(101, 4051, Severity::Critical));
    assert!(!tracker.should_notify(101, 4051, Severity::Warning));
}

#[test]
fn test_pairs_are_tracked_independently() {
    let tracker = tracker(3600, 3600);

    assert!(tracker.should_notify(101, 4051, Severity::Warning));
    // Different fuel type on the same starbase
    assert!(tracker.should_notify(101, 16275, Severity::Warning));
    // Different starbase, same fuel type
    assert!(tracker.should_notify(102, 4051, Severity::Warning));
}

#[test]
fn test_expired_window_allows_a_repeat() {
    let tracker = tracker(1, 3600);

    assert!(tracker.should_notify(101, 4051, Severity::Warning));
    assert!(!tracker.should_notify(101, 4051, Severity::Warning));

    sleep(Duration::from_millis(1200));

    assert!(tracker.should_notify(101, 4051, Severity::Warning));
}
