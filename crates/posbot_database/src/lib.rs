//! PostgreSQL integration for POSbot.
//!
//! The game's static data export ships a denormalized map table keyed by
//! item ID; POSbot only needs the slice mapping moon IDs to display names.
//! This crate wraps that lookup behind the [`LocationSource`] seam.
//!
//! # Example
//!
//! ```rust,ignore
//! use posbot_core::LocationSource;
//! use posbot_database::LocationRepository;
//!
//! let repo = LocationRepository::connect("postgres://posbot@localhost/sde")?;
//! let name = repo.location_name(40131419)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod repository;
pub mod schema;

pub use connection::establish_connection;
pub use repository::LocationRepository;
