//! Typed cache keys.
//!
//! Domain code never concatenates key strings; the key namespace lives here
//! and is mapped to the backend's string encoding in one place.

/// Typed key for every record POSbot stores in the cache backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The whole corporation starbase listing
    StarbaseList,
    /// Detail record for one starbase
    StarbaseDetails(i64),
    /// Enriched POS composite for one starbase
    Pos(i64),
    /// Sent-notification record for one (starbase, fuel type) pair
    Notification {
        /// Starbase the alert was about
        starbase_id: i64,
        /// Fuel type the alert was about
        fuel_type_id: i32,
    },
    /// Usage counter for a chat command
    CommandUsage(String),
    /// Error counter for a chat command
    CommandError(String),
}

/// Prefix for command usage counter keys.
pub(crate) const KEY_COMMAND_USAGE: &str = "posbot:command:usage";
/// Prefix for command error counter keys.
pub(crate) const KEY_COMMAND_ERROR: &str = "posbot:command:error";

impl CacheKey {
    /// Encode the key to the backend's string namespace.
    pub fn encode(&self) -> String {
        match self {
            Self::StarbaseList => "posbot:starbase:list".to_string(),
            Self::StarbaseDetails(id) => format!("posbot:starbase:details:{}", id),
            Self::Pos(id) => format!("posbot:pos:{}", id),
            Self::Notification {
                starbase_id,
                fuel_type_id,
            } => format!("posbot:notification:{}:{}", starbase_id, fuel_type_id),
            Self::CommandUsage(command) => format!("{}:{}", KEY_COMMAND_USAGE, command),
            Self::CommandError(command) => format!("{}:{}", KEY_COMMAND_ERROR, command),
        }
    }
}
