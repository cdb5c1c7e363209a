//! Error types for the POSbot workspace.
//!
//! This crate provides the foundation error types used throughout POSbot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! A cache miss is deliberately NOT an error anywhere in this workspace: the
//! cache layer reports misses as `Ok(None)` and callers fall through to the
//! upstream fetch path.
//!
//! # Examples
//!
//! ```
//! use posbot_error::{PosbotResult, FetchError, FetchErrorKind};
//!
//! fn fetch_list() -> PosbotResult<String> {
//!     Err(FetchError::new(FetchErrorKind::Transport("connection refused".into())))?
//! }
//!
//! match fetch_list() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod config;
mod database;
mod discord;
mod error;
mod fetch;
mod lookup;
mod not_found;

pub use cache::{CacheError, CacheErrorKind};
pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use discord::{DiscordError, DiscordErrorKind};
pub use error::{PosbotError, PosbotErrorKind, PosbotResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use lookup::LookupError;
pub use not_found::NotFoundError;
