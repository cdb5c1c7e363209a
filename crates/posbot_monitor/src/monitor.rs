//! The polling scheduler driving the refresh-and-alert cycle.

use crate::{AlertSink, FuelAlert, NotificationTracker, Resolver};
use posbot_core::Severity;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info, instrument, warn};

/// Process exit code for a clean operator-requested shutdown.
pub const EXIT_SHUTDOWN: i32 = 0;
/// Process exit code asking the supervisor to start a fresh instance.
pub const EXIT_RESTART: i32 = 1;
/// Process exit code after an OS termination signal.
pub const EXIT_SIGNAL: i32 = 2;

fn default_interval_secs() -> u64 {
    300
}

/// Scheduler configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between refresh-and-alert cycles
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Warning threshold in whole hours of fuel remaining
    pub fuel_warning_hours: i64,
    /// Critical threshold in whole hours of fuel remaining
    pub fuel_critical_hours: i64,
    /// Mirror background refresh failures to the channel
    #[serde(default)]
    pub verbose: bool,
}

/// Classify a remaining-fuel figure against the configured thresholds.
///
/// Hours are truncated before comparison, so "1.9 hours left" already counts
/// as at-or-below a 1-hour threshold boundary of 1.
pub fn fuel_severity(hours_remaining: f64, config: &MonitorConfig) -> Severity {
    let whole_hours = hours_remaining as i64;
    if whole_hours <= config.fuel_critical_hours {
        Severity::Critical
    } else if whole_hours <= config.fuel_warning_hours {
        Severity::Warning
    } else {
        Severity::Nominal
    }
}

/// Periodic fuel monitor.
///
/// Runs one refresh-and-alert cycle immediately at startup, then on every
/// interval tick until the shutdown signal fires. Ticks run sequentially in
/// a single task; a slow cycle delays the next tick rather than overlapping
/// it (tick duration is assumed well under the interval).
pub struct FuelMonitor<S: AlertSink> {
    resolver: Arc<Resolver>,
    tracker: NotificationTracker,
    sink: Arc<S>,
    config: MonitorConfig,
    shutdown: watch::Receiver<Option<i32>>,
}

impl<S: AlertSink> FuelMonitor<S> {
    /// Create the monitor.
    pub fn new(
        resolver: Arc<Resolver>,
        tracker: NotificationTracker,
        sink: Arc<S>,
        config: MonitorConfig,
        shutdown: watch::Receiver<Option<i32>>,
    ) -> Self {
        Self {
            resolver,
            tracker,
            sink,
            config,
            shutdown,
        }
    }

    /// Run the monitor loop until shutdown.
    ///
    /// Shutdown is observed between ticks; the cycle in flight finishes
    /// naturally and no new tick starts afterwards.
    #[instrument(skip(self), fields(interval_secs = self.config.interval_secs))]
    pub async fn run(mut self) {
        info!("Fuel monitor started");

        let mut ticker = interval(Duration::from_secs(self.config.interval_secs.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.check_starbase_fuel().await;
                }
                changed = self.shutdown.changed() => {
                    if changed.is_err() || self.shutdown.borrow_and_update().is_some() {
                        break;
                    }
                }
            }
        }

        info!("Fuel monitor stopped");
    }

    /// One refresh-and-alert cycle.
    ///
    /// Failures for individual starbases are logged and skipped; the cycle
    /// always runs to completion over the remaining entries and never tears
    /// down the loop.
    #[instrument(skip(self))]
    async fn check_starbase_fuel(&self) {
        info!("Checking starbase fuel");

        if let Err(e) = self.resolver.update_monitored_details().await {
            error!(error = %e, "Failed to update monitored starbase details");
            if self.config.verbose {
                self.report_status("There was an error updating monitored POSes")
                    .await;
            }
            return;
        }

        let monitored = match self.resolver.monitored_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Failed to retrieve monitored starbases");
                if self.config.verbose {
                    self.report_status("There was an error retrieving monitored POSes")
                        .await;
                }
                return;
            }
        };

        for starbase_id in monitored {
            debug!(starbase_id, "Checking POS fuel status");

            let pos = match self.resolver.pos(starbase_id).await {
                Ok(pos) => pos,
                Err(e) => {
                    warn!(starbase_id, error = %e, "Failed to get POS for fuel check");
                    if self.config.verbose {
                        self.report_status(&format!(
                            "There was an error retrieving POS #{}",
                            starbase_id
                        ))
                        .await;
                    }
                    continue;
                }
            };

            for fuel in pos.fuel() {
                if !*fuel.constantly_required() {
                    continue;
                }
                // No requirement entry means no meaningful burn rate; never alert.
                let Some(hours) = *fuel.hours_remaining() else {
                    continue;
                };

                let severity = fuel_severity(hours, &self.config);
                if severity == Severity::Nominal {
                    continue;
                }

                if !self
                    .tracker
                    .should_notify(starbase_id, *fuel.type_id(), severity)
                {
                    debug!(
                        starbase_id,
                        fuel_type_id = *fuel.type_id(),
                        %severity,
                        "Notification already sent, skipping"
                    );
                    continue;
                }

                let alert = FuelAlert::new(
                    starbase_id,
                    pos.location_name().clone(),
                    pos.owner_name().clone(),
                    *fuel.type_id(),
                    fuel.type_name().clone(),
                    severity,
                    hours,
                );

                if let Err(e) = self.sink.alert(&alert).await {
                    warn!(
                        starbase_id,
                        fuel_type_id = *fuel.type_id(),
                        error = %e,
                        "Failed to deliver fuel alert"
                    );
                } else {
                    info!(
                        starbase_id,
                        fuel_type_id = *fuel.type_id(),
                        %severity,
                        "Fuel notification sent"
                    );
                }
            }
        }

        info!("Finished checking starbase fuel");
    }

    async fn report_status(&self, message: &str) {
        if let Err(e) = self.sink.status(message).await {
            warn!(error = %e, "Failed to mirror status message");
        }
    }
}
