//! Source traits implemented by the upstream API client and the database.
//!
//! The resolver and scheduler are written against these seams so that tests
//! can substitute deterministic in-memory sources.

use crate::{StarbaseDetails, StarbaseList};
use async_trait::async_trait;
use posbot_error::PosbotResult;

/// Read-only access to the corporation starbase endpoints.
///
/// Each call is a single upstream round trip with a finite timeout. A failed
/// call is not retried here; the caller decides whether to skip-and-continue
/// or surface the failure.
#[async_trait]
pub trait StarbaseSource: Send + Sync {
    /// Fetch the full corporation starbase listing.
    async fn starbase_list(&self) -> PosbotResult<StarbaseList>;

    /// Fetch the detail record for one starbase.
    async fn starbase_details(&self, starbase_id: i64) -> PosbotResult<StarbaseDetails>;
}

/// Display-name resolution for type and corporation IDs.
#[async_trait]
pub trait NameSource: Send + Sync {
    /// Resolve a type ID to its display name.
    async fn type_name(&self, type_id: i32) -> PosbotResult<String>;

    /// Resolve a corporation ID to its display name.
    async fn corporation_name(&self, corporation_id: i64) -> PosbotResult<String>;
}

/// Display-name resolution for location (moon) IDs.
///
/// Backed by a relational lookup table; synchronous because the diesel
/// connection is.
pub trait LocationSource: Send + Sync {
    /// Resolve a moon ID to its display name.
    fn location_name(&self, location_id: i64) -> PosbotResult<String>;
}
