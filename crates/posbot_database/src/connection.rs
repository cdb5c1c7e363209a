//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use posbot_error::{DatabaseError, DatabaseErrorKind, PosbotResult};

/// Establish a connection to the PostgreSQL database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub fn establish_connection(database_url: &str) -> PosbotResult<PgConnection> {
    PgConnection::establish(database_url).map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())).into()
    })
}
