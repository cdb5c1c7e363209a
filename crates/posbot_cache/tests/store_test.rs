//! Tests for the expiring cache store.

use chrono::{Duration, Utc};
use posbot_cache::{CacheBackend, CacheKey, CommandStats, MemoryBackend, TypedCache};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::thread::sleep;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Payload {
    id: i64,
    name: String,
}

fn typed() -> TypedCache {
    TypedCache::new(Arc::new(MemoryBackend::new()))
}

#[test]
fn test_get_before_expiry_hits() {
    let cache = typed();
    let value = Payload {
        id: 101,
        name: "1-SMEB VI - Moon 2".into(),
    };

    cache
        .set(&CacheKey::Pos(101), &value, Utc::now() + Duration::seconds(5))
        .unwrap();

    let cached: Option<Payload> = cache.get(&CacheKey::Pos(101)).unwrap();
    assert_eq!(cached, Some(value));
}

#[test]
fn test_get_after_expiry_misses() {
    let cache = typed();
    let value = Payload {
        id: 101,
        name: "1-SMEB VI - Moon 2".into(),
    };

    cache
        .set(
            &CacheKey::Pos(101),
            &value,
            Utc::now() + Duration::milliseconds(150),
        )
        .unwrap();

    // Available strictly before valid_until
    let cached: Option<Payload> = cache.get(&CacheKey::Pos(101)).unwrap();
    assert!(cached.is_some());

    sleep(std::time::Duration::from_millis(250));

    // At or after valid_until the entry is gone
    let cached: Option<Payload> = cache.get(&CacheKey::Pos(101)).unwrap();
    assert!(cached.is_none());
}

#[test]
fn test_set_with_past_expiry_is_a_no_op() {
    let backend = MemoryBackend::new();

    backend
        .set("posbot:starbase:list", b"{}".to_vec(), Utc::now() - Duration::seconds(1))
        .unwrap();
    assert!(backend.get("posbot:starbase:list").unwrap().is_none());
    assert!(backend.is_empty());

    // Expiry exactly at "now" must not cache either
    let now = Utc::now();
    backend
        .set("posbot:starbase:list", b"{}".to_vec(), now)
        .unwrap();
    assert!(backend.get("posbot:starbase:list").unwrap().is_none());
}

#[test]
fn test_absent_and_expired_are_indistinguishable() {
    let backend = MemoryBackend::new();

    assert!(backend.get("posbot:pos:7").unwrap().is_none());

    backend
        .set(
            "posbot:pos:7",
            b"{}".to_vec(),
            Utc::now() + Duration::milliseconds(100),
        )
        .unwrap();
    sleep(std::time::Duration::from_millis(200));

    assert!(backend.get("posbot:pos:7").unwrap().is_none());
}

#[test]
fn test_entries_are_replaced_wholesale() {
    let cache = typed();
    let first = Payload {
        id: 1,
        name: "first".into(),
    };
    let second = Payload {
        id: 1,
        name: "second".into(),
    };
    let valid_until = Utc::now() + Duration::seconds(5);

    cache.set(&CacheKey::StarbaseDetails(1), &first, valid_until).unwrap();
    cache.set(&CacheKey::StarbaseDetails(1), &second, valid_until).unwrap();

    let cached: Option<Payload> = cache.get(&CacheKey::StarbaseDetails(1)).unwrap();
    assert_eq!(cached, Some(second));
}

#[test]
fn test_counters_increment_and_collect() {
    let backend: Arc<MemoryBackend> = Arc::new(MemoryBackend::new());
    let stats = CommandStats::new(backend.clone());

    stats.record_usage("fuel");
    stats.record_usage("fuel");
    stats.record_usage("list");
    stats.record_error("fuel");

    let collected = stats.collect().unwrap();
    assert_eq!(collected["fuel"].usage, 2);
    assert_eq!(collected["fuel"].error, 1);
    assert_eq!(collected["list"].usage, 1);
    assert_eq!(collected["list"].error, 0);
}

#[test]
fn test_scan_skips_expired_keys() {
    let backend = MemoryBackend::new();

    backend
        .set(
            "posbot:notification:1:4051",
            b"1".to_vec(),
            Utc::now() + Duration::milliseconds(100),
        )
        .unwrap();
    backend
        .set(
            "posbot:notification:2:4051",
            b"1".to_vec(),
            Utc::now() + Duration::seconds(30),
        )
        .unwrap();

    sleep(std::time::Duration::from_millis(200));

    let keys = backend.scan("posbot:notification").unwrap();
    assert_eq!(keys, vec!["posbot:notification:2:4051".to_string()]);
}
