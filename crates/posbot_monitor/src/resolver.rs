//! Read-through resolver over the cache and the upstream sources.

use chrono::{DateTime, Utc};
use posbot_cache::{CacheKey, TypedCache};
use posbot_core::{
    classify_fuel, required_per_hour, LocationSource, NameSource, Pos, PosFuel, PosSize,
    StarbaseDetails, StarbaseList, StarbaseSource,
};
use posbot_error::{NotFoundError, PosbotResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Read-through resolver for starbase records.
///
/// Every read follows the same shape: check the cache, fetch upstream on a
/// miss, write the fresh record through under its own server-declared
/// expiry, return it. Fetch failures propagate without caching anything;
/// cache write failures are logged and swallowed, degrading that key to
/// always-fetch.
///
/// Shared between the scheduler tick and the command path; both see the same
/// cache, and the last writer for a key wins (entries are idempotently
/// derived from upstream state, so this is harmless).
pub struct Resolver {
    starbases: Arc<dyn StarbaseSource>,
    names: Arc<dyn NameSource>,
    locations: Arc<dyn LocationSource>,
    cache: TypedCache,
    ignored: Vec<i64>,
}

impl Resolver {
    /// Create a resolver.
    ///
    /// `ignored` is the out-of-band list of starbase IDs excluded from
    /// monitoring; everything else in the listing is monitored.
    pub fn new(
        starbases: Arc<dyn StarbaseSource>,
        names: Arc<dyn NameSource>,
        locations: Arc<dyn LocationSource>,
        cache: TypedCache,
        ignored: Vec<i64>,
    ) -> Self {
        Self {
            starbases,
            names,
            locations,
            cache,
            ignored,
        }
    }

    fn cache_write(&self, key: &CacheKey, value: &impl serde::Serialize, valid_until: DateTime<Utc>) {
        // Best-effort: a failed write degrades to always-fetch, never fails the read.
        if let Err(e) = self.cache.set(key, value, valid_until) {
            warn!(key = %key.encode(), error = %e, "Failed to cache record");
        }
    }

    /// The corporation starbase listing, cached whole.
    #[instrument(skip(self))]
    pub async fn starbase_list(&self) -> PosbotResult<StarbaseList> {
        if let Some(list) = self.cache.get::<StarbaseList>(&CacheKey::StarbaseList)? {
            debug!("Retrieved starbase list from cache");
            return Ok(list);
        }

        let list = self.starbases.starbase_list().await?;
        self.cache_write(&CacheKey::StarbaseList, &list, *list.cached_until());
        debug!(count = list.starbases().len(), "Retrieved starbase list from API");
        Ok(list)
    }

    /// The detail record for one starbase, cached per ID.
    #[instrument(skip(self))]
    pub async fn starbase_details(&self, starbase_id: i64) -> PosbotResult<StarbaseDetails> {
        let key = CacheKey::StarbaseDetails(starbase_id);
        if let Some(details) = self.cache.get::<StarbaseDetails>(&key)? {
            debug!(starbase_id, "Retrieved starbase details from cache");
            return Ok(details);
        }

        let details = self.starbases.starbase_details(starbase_id).await?;
        self.cache_write(&key, &details, *details.cached_until());
        debug!(starbase_id, "Retrieved starbase details from API");
        Ok(details)
    }

    /// The enriched POS composite for one starbase.
    ///
    /// Merges the listing summary and the detail record with resolved
    /// display names and the size classification. The composite expires with
    /// its most stale input. A failed fuel-row name lookup propagates and
    /// the composite is not cached; failed location or owner lookups degrade
    /// to a placeholder name instead.
    #[instrument(skip(self))]
    pub async fn pos(&self, starbase_id: i64) -> PosbotResult<Pos> {
        let key = CacheKey::Pos(starbase_id);
        if let Some(pos) = self.cache.get::<Pos>(&key)? {
            debug!(starbase_id, "Retrieved POS from cache");
            return Ok(pos);
        }

        let list = self.starbase_list().await?;
        let summary = list
            .find(starbase_id)
            .ok_or_else(|| NotFoundError::new(starbase_id))?
            .clone();

        let details = self.starbase_details(starbase_id).await?;

        let tower_name = self.names.type_name(*summary.type_id()).await?;
        let size = PosSize::from_type_name(&tower_name);

        let location_name = self.location_label(*summary.moon_id());
        let owner_name = self.owner_label(*summary.standing_owner_id()).await;

        let mut fuel = Vec::with_capacity(details.fuel().len());
        for row in details.fuel() {
            // Propagates on failure: partial composites are never cached.
            let type_name = self.names.type_name(*row.type_id()).await?;
            let (kind, constantly_required) = classify_fuel(&type_name);
            let required = required_per_hour(size, kind);
            fuel.push(PosFuel::new(
                kind,
                *row.type_id(),
                type_name,
                *row.quantity(),
                required,
                constantly_required,
            ));
        }

        // Only as fresh as the most stale input.
        let cached_until = (*list.cached_until()).min(*details.cached_until());

        let pos = Pos::new(
            starbase_id,
            *summary.location_id(),
            location_name,
            *summary.standing_owner_id(),
            owner_name,
            *summary.state(),
            size,
            cached_until,
            fuel,
        );

        self.cache_write(&key, &pos, cached_until);
        debug!(starbase_id, "Assembled POS");
        Ok(pos)
    }

    /// Resolve a moon's display name, degrading to a placeholder on failure.
    pub fn location_label(&self, moon_id: i64) -> String {
        match self.locations.location_name(moon_id) {
            Ok(name) => name,
            Err(e) => {
                warn!(moon_id, error = %e, "Failed to resolve location name");
                format!("*unknown location - {}*", moon_id)
            }
        }
    }

    /// Resolve a corporation's display name, degrading to a placeholder on failure.
    pub async fn owner_label(&self, corporation_id: i64) -> String {
        match self.names.corporation_name(corporation_id).await {
            Ok(name) => name,
            Err(e) => {
                warn!(corporation_id, error = %e, "Failed to resolve owner name");
                format!("*unknown corporation - {}*", corporation_id)
            }
        }
    }

    /// Whether a starbase is monitored (absent from the ignore list).
    pub fn is_monitored(&self, starbase_id: i64) -> bool {
        !self.ignored.contains(&starbase_id)
    }

    /// IDs of all monitored starbases, in listing order.
    pub async fn monitored_ids(&self) -> PosbotResult<Vec<i64>> {
        let list = self.starbase_list().await?;
        Ok(list
            .starbases()
            .iter()
            .map(|s| *s.id())
            .filter(|id| self.is_monitored(*id))
            .collect())
    }

    /// Refresh the detail records of every monitored starbase.
    ///
    /// Partial-failure tolerant: a failed fetch for one starbase is logged
    /// and skipped, and the cycle continues with the rest.
    #[instrument(skip(self))]
    pub async fn update_monitored_details(&self) -> PosbotResult<()> {
        for starbase_id in self.monitored_ids().await? {
            if let Err(e) = self.starbase_details(starbase_id).await {
                warn!(starbase_id, error = %e, "Failed to refresh starbase details");
                continue;
            }
        }
        Ok(())
    }
}
