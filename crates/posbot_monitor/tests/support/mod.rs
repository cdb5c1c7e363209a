//! Shared in-memory sources for resolver and scheduler tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use posbot_core::{
    FuelRow, LocationSource, NameSource, StarbaseDetails, StarbaseList, StarbaseSource,
    StarbaseState, StarbaseSummary,
};
use posbot_error::{FetchError, FetchErrorKind, LookupError, PosbotResult};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic starbase source with per-call counters.
#[derive(Default)]
pub struct MockApi {
    pub list: Mutex<Option<StarbaseList>>,
    pub details: Mutex<HashMap<i64, StarbaseDetails>>,
    pub fail_details: Mutex<HashSet<i64>>,
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_list(&self, list: StarbaseList) {
        *self.list.lock() = Some(list);
    }

    pub fn set_details(&self, details: StarbaseDetails) {
        self.details.lock().insert(*details.id(), details);
    }

    pub fn fail_details_for(&self, starbase_id: i64) {
        self.fail_details.lock().insert(starbase_id);
    }
}

#[async_trait]
impl StarbaseSource for MockApi {
    async fn starbase_list(&self) -> PosbotResult<StarbaseList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list
            .lock()
            .clone()
            .ok_or_else(|| FetchError::new(FetchErrorKind::Transport("no listing".into())).into())
    }

    async fn starbase_details(&self, starbase_id: i64) -> PosbotResult<StarbaseDetails> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_details.lock().contains(&starbase_id) {
            return Err(
                FetchError::new(FetchErrorKind::Transport("connection reset".into())).into(),
            );
        }
        self.details
            .lock()
            .get(&starbase_id)
            .cloned()
            .ok_or_else(|| {
                FetchError::new(FetchErrorKind::Status {
                    status: 404,
                    body: "no such starbase".into(),
                })
                .into()
            })
    }
}

/// Name source backed by fixed maps.
#[derive(Default)]
pub struct MockNames {
    pub types: HashMap<i32, String>,
    pub corporations: HashMap<i64, String>,
}

impl MockNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_id: i32, name: &str) -> Self {
        self.types.insert(type_id, name.to_string());
        self
    }

    pub fn with_corporation(mut self, corporation_id: i64, name: &str) -> Self {
        self.corporations.insert(corporation_id, name.to_string());
        self
    }
}

#[async_trait]
impl NameSource for MockNames {
    async fn type_name(&self, type_id: i32) -> PosbotResult<String> {
        self.types
            .get(&type_id)
            .cloned()
            .ok_or_else(|| LookupError::new("type", type_id as i64).into())
    }

    async fn corporation_name(&self, corporation_id: i64) -> PosbotResult<String> {
        self.corporations
            .get(&corporation_id)
            .cloned()
            .ok_or_else(|| LookupError::new("corporation", corporation_id).into())
    }
}

/// Location source backed by a fixed map.
#[derive(Default)]
pub struct MockLocations {
    pub moons: HashMap<i64, String>,
}

impl MockLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moon(mut self, moon_id: i64, name: &str) -> Self {
        self.moons.insert(moon_id, name.to_string());
        self
    }
}

impl LocationSource for MockLocations {
    fn location_name(&self, location_id: i64) -> PosbotResult<String> {
        self.moons
            .get(&location_id)
            .cloned()
            .ok_or_else(|| LookupError::new("location", location_id).into())
    }
}

/// A summary for a large Caldari tower owned by corporation 1000.
pub fn summary(id: i64) -> StarbaseSummary {
    StarbaseSummary::new(id, 16213, 30002904, 40_000_000 + id, StarbaseState::Online, 1000)
}

pub fn listing(ids: &[i64], cached_until: DateTime<Utc>) -> StarbaseList {
    StarbaseList::new(ids.iter().map(|id| summary(*id)).collect(), cached_until)
}

pub fn details(id: i64, fuel: Vec<FuelRow>, cached_until: DateTime<Utc>) -> StarbaseDetails {
    StarbaseDetails::new(
        id,
        StarbaseState::Online,
        serde_json::json!({"usage_flags": 3}),
        fuel,
        cached_until,
    )
}

pub fn in_secs(secs: i64) -> DateTime<Utc> {
    Utc::now() + Duration::seconds(secs)
}
