//! Upstream starbase records.
//!
//! These types mirror the payloads returned by the game-data API. Each
//! top-level record carries the server-declared `cached_until` instant,
//! which the cache layer uses as the entry expiry without modification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a starbase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum StarbaseState {
    /// Floating free in space, not attached to a moon
    #[display("unanchored")]
    Unanchored,
    /// Anchored at a moon but powered down
    #[display("anchored")]
    Anchored,
    /// Currently onlining
    #[display("onlining")]
    Onlining,
    /// Reinforced after an attack, running on strontium
    #[display("reinforced")]
    Reinforced,
    /// Fully online
    #[display("online")]
    Online,
}

/// One starbase as it appears in the corporation listing.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct StarbaseSummary {
    /// Starbase item ID (unique key)
    id: i64,
    /// Control tower type ID, drives size classification
    type_id: i32,
    /// Solar system the starbase is anchored in
    location_id: i64,
    /// Moon the starbase is anchored at
    moon_id: i64,
    /// Lifecycle state
    state: StarbaseState,
    /// Corporation the starbase uses for standings
    standing_owner_id: i64,
}

/// The full corporation starbase listing, cached whole.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct StarbaseList {
    /// All starbases visible to the corporation key
    starbases: Vec<StarbaseSummary>,
    /// Server-declared expiry for this listing
    cached_until: DateTime<Utc>,
}

impl StarbaseList {
    /// Find a starbase summary by ID.
    pub fn find(&self, starbase_id: i64) -> Option<&StarbaseSummary> {
        self.starbases.iter().find(|s| *s.id() == starbase_id)
    }
}

/// One resource row attached to a starbase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct FuelRow {
    /// Resource type ID
    type_id: i32,
    /// Units currently in the fuel bay
    quantity: i64,
}

/// Per-starbase detail record, cached per ID.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct StarbaseDetails {
    /// Starbase item ID
    id: i64,
    /// Lifecycle state
    state: StarbaseState,
    /// Usage/access settings, opaque to the monitor
    general_settings: serde_json::Value,
    /// Resource rows currently in the fuel bay
    fuel: Vec<FuelRow>,
    /// Server-declared expiry for this record
    cached_until: DateTime<Utc>,
}
