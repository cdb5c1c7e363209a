//! Fuel-kind classification and the static requirement table.

use crate::PosSize;
use serde::{Deserialize, Serialize};

/// Kind of resource held in a starbase fuel bay.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FuelKind {
    /// Fuel blocks, burned continuously while the tower is online
    #[display("fuel block")]
    FuelBlock,
    /// Strontium clathrates, consumed only while reinforced
    #[display("strontium")]
    Strontium,
}

/// Classify a resource row by its resolved display name.
///
/// Returns the fuel kind and whether the resource is continuously consumed.
/// The match is a plain substring test against the display name; names
/// matching neither pattern keep the fuel-block kind but are not treated as
/// continuously consumed and therefore never alert.
pub fn classify_fuel(type_name: &str) -> (FuelKind, bool) {
    if type_name.contains("Fuel Block") {
        (FuelKind::FuelBlock, true)
    } else if type_name.contains("Strontium") {
        (FuelKind::Strontium, false)
    } else {
        (FuelKind::FuelBlock, false)
    }
}

/// Units per hour a tower of the given size consumes, by fuel kind.
const REQUIRED_FUEL: [((PosSize, FuelKind), i64); 6] = [
    ((PosSize::Small, FuelKind::FuelBlock), 10),
    ((PosSize::Small, FuelKind::Strontium), 100),
    ((PosSize::Medium, FuelKind::FuelBlock), 20),
    ((PosSize::Medium, FuelKind::Strontium), 200),
    ((PosSize::Large, FuelKind::FuelBlock), 40),
    ((PosSize::Large, FuelKind::Strontium), 400),
];

/// Look up the hourly requirement for a size and fuel kind.
///
/// A missing table entry yields 0, which downstream code treats as "no
/// requirement known": `hours_remaining` becomes `None` and the row never
/// alerts. The division-by-zero case is guarded in [`crate::PosFuel`].
pub fn required_per_hour(size: PosSize, kind: FuelKind) -> i64 {
    match REQUIRED_FUEL
        .iter()
        .find(|((s, k), _)| *s == size && *k == kind)
    {
        Some((_, required)) => *required,
        None => {
            tracing::warn!(%size, %kind, "No fuel requirement entry for this size/kind");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_fuel_blocks_as_continuously_consumed() {
        let (kind, constant) = classify_fuel("Nitrogen Fuel Block");
        assert_eq!(kind, FuelKind::FuelBlock);
        assert!(constant);
    }

    #[test]
    fn classifies_strontium_as_reserve() {
        let (kind, constant) = classify_fuel("Strontium Clathrates");
        assert_eq!(kind, FuelKind::Strontium);
        assert!(!constant);
    }

    #[test]
    fn unmatched_names_never_alert() {
        let (kind, constant) = classify_fuel("Robotics");
        assert_eq!(kind, FuelKind::FuelBlock);
        assert!(!constant);
    }

    #[test]
    fn requirement_table_scales_with_size() {
        assert_eq!(required_per_hour(PosSize::Small, FuelKind::FuelBlock), 10);
        assert_eq!(required_per_hour(PosSize::Medium, FuelKind::FuelBlock), 20);
        assert_eq!(required_per_hour(PosSize::Large, FuelKind::FuelBlock), 40);
        assert_eq!(required_per_hour(PosSize::Large, FuelKind::Strontium), 400);
    }
}
