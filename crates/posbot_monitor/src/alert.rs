//! Alert output seam.

use async_trait::async_trait;
use posbot_core::Severity;
use posbot_error::PosbotResult;

/// One low-fuel alert ready for delivery.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct FuelAlert {
    /// Starbase the alert is about
    starbase_id: i64,
    /// Resolved location display name
    location_name: String,
    /// Resolved owner display name
    owner_name: String,
    /// Fuel type ID
    fuel_type_id: i32,
    /// Fuel type display name
    fuel_type_name: String,
    /// Alert severity, warning or critical
    severity: Severity,
    /// Hours of fuel left at the current burn rate
    hours_remaining: f64,
}

impl FuelAlert {
    /// Build an alert.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        starbase_id: i64,
        location_name: String,
        owner_name: String,
        fuel_type_id: i32,
        fuel_type_name: String,
        severity: Severity,
        hours_remaining: f64,
    ) -> Self {
        Self {
            starbase_id,
            location_name,
            owner_name,
            fuel_type_id,
            fuel_type_name,
            severity,
            hours_remaining,
        }
    }
}

/// Delivery target for scheduler output.
///
/// Implemented by the Discord layer; tests substitute a recording sink. A
/// failed delivery is the sink's problem to report, the scheduler logs it
/// and moves on.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver a low-fuel alert.
    async fn alert(&self, alert: &FuelAlert) -> PosbotResult<()>;

    /// Mirror a background refresh failure to the channel (verbose mode).
    async fn status(&self, message: &str) -> PosbotResult<()>;
}
