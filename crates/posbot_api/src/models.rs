//! JSON wire models for the name-lookup and status endpoints.
//!
//! The starbase listing and detail payloads deserialize straight into the
//! `posbot_core` records, which mirror them field for field; only the
//! ancillary endpoints need their own shapes here.

use serde::{Deserialize, Serialize};

/// Universe type record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TypeJson {
    /// Type ID that was looked up
    type_id: i32,
    /// Display name, e.g. "Caldari Control Tower Small"
    name: String,
}

impl TypeJson {
    /// Consume the record, keeping only the name.
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Corporation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CorporationJson {
    /// Corporation ID that was looked up
    corporation_id: i64,
    /// Corporation display name
    name: String,
}

impl CorporationJson {
    /// Consume the record, keeping only the name.
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Server status record, used as a startup connectivity probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerStatusJson {
    /// Whether the game server is accepting connections
    server_open: bool,
    /// Players currently online
    #[serde(default)]
    online_players: i64,
}

/// Error payload the API embeds in otherwise-successful responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorJson {
    pub code: i32,
    pub message: String,
}

/// Envelope distinguishing API-declared errors from real payloads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiResponse<T> {
    Error {
        error: ApiErrorJson,
    },
    Payload(T),
}
