//! Alert severity ordering.

use serde::{Deserialize, Serialize};

/// Ordered alert severity for fuel notifications.
///
/// The ordering is load-bearing: the notification de-duplicator suppresses a
/// repeat at the same or lower severity while an unexpired record exists, but
/// lets a higher severity escalate past it.
///
/// # Examples
///
/// ```
/// use posbot_core::Severity;
///
/// assert!(Severity::Critical > Severity::Warning);
/// assert_eq!(Severity::from_u8(2), Some(Severity::Critical));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[repr(u8)]
pub enum Severity {
    /// Fuel level above all thresholds
    #[display("nominal")]
    Nominal = 0,
    /// Fuel at or below the warning threshold
    #[display("warning")]
    Warning = 1,
    /// Fuel at or below the critical threshold
    #[display("critical")]
    Critical = 2,
}

impl Severity {
    /// Numeric value as stored in the notification record.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a stored numeric severity.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Nominal),
            1 => Some(Self::Warning),
            2 => Some(Self::Critical),
            _ => None,
        }
    }
}
