//! Expiring cache store for POSbot.
//!
//! This crate provides the volatile cache backing all cached reads: a blob
//! store with server-declared expiry semantics, a typed key namespace, a
//! serde layer over the raw backend, and the ancillary command usage/error
//! counters surfaced by the stats command.
//!
//! A miss is control flow, not an error: `get` returns `Ok(None)` for absent
//! and expired entries alike.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod key;
mod stats;
mod typed;

pub use backend::{CacheBackend, MemoryBackend};
pub use key::CacheKey;
pub use stats::{CommandStat, CommandStats};
pub use typed::TypedCache;
