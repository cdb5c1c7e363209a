//! Tests for the read-through resolver.

mod support;

use posbot_cache::{CacheKey, MemoryBackend, TypedCache};
use posbot_core::{FuelRow, Pos, PosSize, StarbaseDetails};
use posbot_error::PosbotErrorKind;
use posbot_monitor::Resolver;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use support::{details, in_secs, listing, MockApi, MockLocations, MockNames};

fn names_for_large_tower() -> MockNames {
    MockNames::new()
        .with_type(16213, "Caldari Control Tower")
        .with_type(4051, "Caldari Fuel Block")
        .with_type(16275, "Strontium Clathrates")
        .with_corporation(1000, "Brave Newbies Inc.")
}

fn resolver(api: Arc<MockApi>, names: MockNames, locations: MockLocations, ignored: Vec<i64>) -> (Resolver, TypedCache) {
    let cache = TypedCache::new(Arc::new(MemoryBackend::new()));
    let resolver = Resolver::new(
        api,
        Arc::new(names),
        Arc::new(locations),
        cache.clone(),
        ignored,
    );
    (resolver, cache)
}

#[tokio::test]
async fn test_second_list_read_is_served_from_cache() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[101], in_secs(60)));
    let (resolver, _) = resolver(api.clone(), names_for_large_tower(), MockLocations::new(), vec![]);

    let first = resolver.starbase_list().await.unwrap();
    let second = resolver.starbase_list().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_expired_list_is_fetched_again() {
    let api = Arc::new(MockApi::new());
    // Expiry in the past: the write is a no-op, every read goes upstream.
    api.set_list(listing(&[101], in_secs(-1)));
    let (resolver, _) = resolver(api.clone(), names_for_large_tower(), MockLocations::new(), vec![]);

    resolver.starbase_list().await.unwrap();
    resolver.starbase_list().await.unwrap();

    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_details_read_through_is_idempotent() {
    let api = Arc::new(MockApi::new());
    api.set_details(details(101, vec![FuelRow::new(4051, 4000)], in_secs(60)));
    let (resolver, _) = resolver(api.clone(), names_for_large_tower(), MockLocations::new(), vec![]);

    resolver.starbase_details(101).await.unwrap();
    resolver.starbase_details(101).await.unwrap();

    assert_eq!(api.detail_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fetch_failure_caches_nothing() {
    let api = Arc::new(MockApi::new());
    api.fail_details_for(101);
    let (resolver, cache) =
        resolver(api.clone(), names_for_large_tower(), MockLocations::new(), vec![]);

    assert!(resolver.starbase_details(101).await.is_err());
    let cached: Option<StarbaseDetails> =
        cache.get(&CacheKey::StarbaseDetails(101)).unwrap();
    assert!(cached.is_none());
}

#[tokio::test]
async fn test_composite_is_only_as_fresh_as_its_stalest_input() {
    let api = Arc::new(MockApi::new());
    let list_expiry = in_secs(600);
    let details_expiry = in_secs(300);
    api.set_list(listing(&[101], list_expiry));
    api.set_details(details(101, vec![FuelRow::new(4051, 4000)], details_expiry));
    let locations = MockLocations::new().with_moon(40_000_101, "1-SMEB VI - Moon 2");
    let (resolver, _) = resolver(api, names_for_large_tower(), locations, vec![]);

    let pos = resolver.pos(101).await.unwrap();

    assert_eq!(*pos.cached_until(), details_expiry);
}

#[tokio::test]
async fn test_composite_enrichment_resolves_names_and_rates() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[101], in_secs(600)));
    api.set_details(
        details(
            101,
            vec![FuelRow::new(4051, 4000), FuelRow::new(16275, 8000)],
            in_secs(300),
        ),
        );
    let locations = MockLocations::new().with_moon(40_000_101, "1-SMEB VI - Moon 2");
    let (resolver, _) = resolver(api, names_for_large_tower(), locations, vec![]);

    let pos = resolver.pos(101).await.unwrap();

    assert_eq!(*pos.size(), PosSize::Large);
    assert_eq!(pos.location_name(), "1-SMEB VI - Moon 2");
    assert_eq!(pos.owner_name(), "Brave Newbies Inc.");

    let blocks = &pos.fuel()[0];
    assert!(blocks.constantly_required());
    assert_eq!(*blocks.required_per_hour(), 40);
    assert_eq!(*blocks.hours_remaining(), Some(100.0));

    let strontium = &pos.fuel()[1];
    assert!(!strontium.constantly_required());
    assert_eq!(*strontium.required_per_hour(), 400);
    assert_eq!(*strontium.hours_remaining(), Some(20.0));
}

#[tokio::test]
async fn test_missing_location_degrades_to_placeholder() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[101], in_secs(600)));
    api.set_details(details(101, vec![], in_secs(300)));
    // No moons configured: the lookup fails and the name degrades.
    let (resolver, _) = resolver(api, names_for_large_tower(), MockLocations::new(), vec![]);

    let pos = resolver.pos(101).await.unwrap();

    assert_eq!(pos.location_name(), "*unknown location - 40000101*");
}

#[tokio::test]
async fn test_failed_fuel_name_lookup_aborts_composite_caching() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[101], in_secs(600)));
    api.set_details(details(101, vec![FuelRow::new(9999, 10)], in_secs(300)));
    // Tower type resolves, the fuel row type does not.
    let names = MockNames::new()
        .with_type(16213, "Caldari Control Tower")
        .with_corporation(1000, "Brave Newbies Inc.");
    let (resolver, cache) = resolver(api, names, MockLocations::new(), vec![]);

    let result = resolver.pos(101).await;
    assert!(matches!(
        result.unwrap_err().kind(),
        PosbotErrorKind::Lookup(_)
    ));

    let cached: Option<Pos> = cache.get(&CacheKey::Pos(101)).unwrap();
    assert!(cached.is_none());
}

#[tokio::test]
async fn test_unknown_starbase_is_not_found() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[101], in_secs(600)));
    let (resolver, _) = resolver(api, names_for_large_tower(), MockLocations::new(), vec![]);

    let result = resolver.pos(999).await;

    assert!(matches!(
        result.unwrap_err().kind(),
        PosbotErrorKind::NotFound(_)
    ));
}

#[tokio::test]
async fn test_monitored_ids_filters_ignored_in_listing_order() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[1, 2, 3], in_secs(600)));
    let (resolver, _) = resolver(api, names_for_large_tower(), MockLocations::new(), vec![2]);

    let monitored = resolver.monitored_ids().await.unwrap();

    assert_eq!(monitored, vec![1, 3]);
}

#[tokio::test]
async fn test_bulk_refresh_tolerates_partial_failure() {
    let api = Arc::new(MockApi::new());
    api.set_list(listing(&[1, 2, 3], in_secs(600)));
    api.set_details(details(1, vec![], in_secs(300)));
    api.fail_details_for(2);
    api.set_details(details(3, vec![], in_secs(300)));
    let (resolver, cache) =
        resolver(api, names_for_large_tower(), MockLocations::new(), vec![]);

    resolver.update_monitored_details().await.unwrap();

    let one: Option<StarbaseDetails> = cache.get(&CacheKey::StarbaseDetails(1)).unwrap();
    let two: Option<StarbaseDetails> = cache.get(&CacheKey::StarbaseDetails(2)).unwrap();
    let three: Option<StarbaseDetails> = cache.get(&CacheKey::StarbaseDetails(3)).unwrap();
    assert!(one.is_some());
    assert!(two.is_none());
    assert!(three.is_some());
}
