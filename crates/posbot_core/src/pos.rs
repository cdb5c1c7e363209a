//! The enriched POS composite record.

use crate::{FuelKind, StarbaseState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Control tower size class, derived from the resolved type name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum PosSize {
    /// Small control tower
    #[display("small")]
    Small,
    /// Medium control tower
    #[display("medium")]
    Medium,
    /// Full-size control tower
    #[display("large")]
    Large,
}

impl PosSize {
    /// Classify a tower by its type display name.
    ///
    /// Substring match against the name ("Small", "Medium"); anything else is
    /// a full-size tower.
    pub fn from_type_name(type_name: &str) -> Self {
        if type_name.contains("Small") {
            Self::Small
        } else if type_name.contains("Medium") {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

/// One enriched fuel row on a POS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PosFuel {
    /// Fuel kind classification
    kind: FuelKind,
    /// Resource type ID
    type_id: i32,
    /// Resolved resource display name
    type_name: String,
    /// Units currently in the fuel bay
    quantity: i64,
    /// Units consumed per hour for this tower size, 0 when unknown
    required_per_hour: i64,
    /// Whether this resource depletes while the tower is online
    constantly_required: bool,
    /// Run time left at the current burn rate, `None` when no requirement is known
    hours_remaining: Option<f64>,
}

impl PosFuel {
    /// Build an enriched fuel row.
    ///
    /// `hours_remaining` is only defined for a positive hourly requirement;
    /// a zero requirement means "not applicable", never a division by zero.
    pub fn new(
        kind: FuelKind,
        type_id: i32,
        type_name: String,
        quantity: i64,
        required_per_hour: i64,
        constantly_required: bool,
    ) -> Self {
        let hours_remaining = if required_per_hour > 0 {
            Some(quantity as f64 / required_per_hour as f64)
        } else {
            None
        };
        Self {
            kind,
            type_id,
            type_name,
            quantity,
            required_per_hour,
            constantly_required,
            hours_remaining,
        }
    }
}

/// The merged, display-ready view of a starbase.
///
/// Combines the listing summary, the detail record and the resolved display
/// names. Only as fresh as its most stale input: `cached_until` is the
/// minimum of the listing and detail expiries.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct Pos {
    /// Starbase item ID
    id: i64,
    /// Solar system ID
    location_id: i64,
    /// Resolved location display name
    location_name: String,
    /// Standings owner corporation ID
    owner_id: i64,
    /// Resolved owner display name
    owner_name: String,
    /// Lifecycle state
    state: StarbaseState,
    /// Tower size class
    size: PosSize,
    /// Expiry of the stalest input record
    cached_until: DateTime<Utc>,
    /// Enriched fuel rows
    fuel: Vec<PosFuel>,
}

/// Format a fractional hour count as a short human-readable duration.
///
/// Renders whole days, hours and minutes, skipping zero units: `49.5` becomes
/// `"2d 1h 30m"`. Non-finite or negative input renders as `"0m"`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0m".to_string();
    }

    let total_minutes = (hours * 60.0).floor() as i64;
    let days = total_minutes / (24 * 60);
    let hrs = (total_minutes % (24 * 60)) / 60;
    let mins = total_minutes % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hrs > 0 {
        parts.push(format!("{}h", hrs));
    }
    if mins > 0 {
        parts.push(format!("{}m", mins));
    }
    if parts.is_empty() {
        return "0m".to_string();
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_from_type_name_substring() {
        assert_eq!(
            PosSize::from_type_name("Caldari Control Tower Small"),
            PosSize::Small
        );
        assert_eq!(
            PosSize::from_type_name("Amarr Control Tower Medium"),
            PosSize::Medium
        );
        assert_eq!(PosSize::from_type_name("Gallente Control Tower"), PosSize::Large);
    }

    #[test]
    fn zero_requirement_yields_no_remaining_time() {
        let fuel = PosFuel::new(FuelKind::FuelBlock, 4247, "Robotics".into(), 1200, 0, false);
        assert_eq!(*fuel.hours_remaining(), None);
    }

    #[test]
    fn remaining_time_is_quantity_over_rate() {
        let fuel = PosFuel::new(
            FuelKind::FuelBlock,
            4051,
            "Caldari Fuel Block".into(),
            400,
            40,
            true,
        );
        assert_eq!(*fuel.hours_remaining(), Some(10.0));
    }

    #[test]
    fn formats_short_durations() {
        assert_eq!(format_hours(49.5), "2d 1h 30m");
        assert_eq!(format_hours(0.25), "15m");
        assert_eq!(format_hours(24.0), "1d");
        assert_eq!(format_hours(0.0), "0m");
        assert_eq!(format_hours(f64::NAN), "0m");
    }
}
