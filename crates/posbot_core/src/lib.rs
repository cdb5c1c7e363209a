//! Domain model for POSbot.
//!
//! This crate defines the starbase types shared across the workspace:
//! upstream records (listing, details), the enriched POS composite, size and
//! fuel-kind classification, the static fuel requirement table, alert
//! severity ordering, and the source traits implemented by the API client
//! and the database lookup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fuel;
mod pos;
mod severity;
mod source;
mod starbase;

pub use fuel::{classify_fuel, required_per_hour, FuelKind};
pub use pos::{format_hours, Pos, PosFuel, PosSize};
pub use severity::Severity;
pub use source::{LocationSource, NameSource, StarbaseSource};
pub use starbase::{FuelRow, StarbaseDetails, StarbaseList, StarbaseState, StarbaseSummary};
