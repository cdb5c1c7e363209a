//! Location-name repository.

use crate::connection::establish_connection;
use crate::schema::map_locations;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use parking_lot::Mutex;
use posbot_core::LocationSource;
use posbot_error::{DatabaseError, DatabaseErrorKind, PosbotResult};
use tracing::instrument;

/// Repository resolving location (moon) IDs to display names.
///
/// Holds a single connection behind a mutex; lookups are rare (one per
/// uncached composite) so pooling would be overkill here.
pub struct LocationRepository {
    conn: Mutex<PgConnection>,
}

impl LocationRepository {
    /// Wrap an established connection.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Connect to the database and verify the lookup table is reachable.
    ///
    /// The table probe catches a misconfigured database at startup instead
    /// of on the first alert cycle.
    #[instrument(skip(database_url))]
    pub fn connect(database_url: &str) -> PosbotResult<Self> {
        let mut conn = establish_connection(database_url)?;

        let rows: i64 = map_locations::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| {
                DatabaseError::new(DatabaseErrorKind::Query(format!(
                    "map_locations probe failed: {}",
                    e
                )))
            })?;
        tracing::debug!(rows, "Verified map_locations lookup table");

        Ok(Self::new(conn))
    }
}

impl LocationSource for LocationRepository {
    fn location_name(&self, location_id: i64) -> PosbotResult<String> {
        let mut conn = self.conn.lock();
        map_locations::table
            .find(location_id)
            .select(map_locations::item_name)
            .first(&mut *conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => DatabaseError::new(
                    DatabaseErrorKind::RowNotFound(format!("location {}", location_id)),
                )
                .into(),
                other => {
                    DatabaseError::new(DatabaseErrorKind::Query(other.to_string())).into()
                }
            })
    }
}
