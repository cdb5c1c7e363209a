//! Game-data API client for POSbot.
//!
//! Wraps the read-only corporation starbase endpoints and the universe name
//! lookups behind the [`posbot_core::StarbaseSource`] and
//! [`posbot_core::NameSource`] seams. Every call is a single round trip with
//! a finite timeout; nothing is retried here, and the server-declared
//! `cached_until` instant is passed through to callers unmodified.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod models;

pub use client::{ApiClient, ApiClientConfig};
pub use models::{CorporationJson, ServerStatusJson, TypeJson};
