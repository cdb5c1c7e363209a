//! Read-through caching, alert de-duplication and the polling scheduler.
//!
//! This crate is the engineering core of POSbot. The [`Resolver`] sits
//! between the chat command layer and the upstream API, serving every read
//! from the cache when the server-declared expiry allows and fetching
//! through on a miss. The [`NotificationTracker`] suppresses repeat alerts
//! per (starbase, fuel type) within severity-specific cool-down windows
//! while letting higher severities escalate past lower ones. The
//! [`FuelMonitor`] drives the refresh-and-alert cycle on a fixed interval,
//! decoupled from incoming commands.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alert;
mod monitor;
mod notify;
mod resolver;

pub use alert::{AlertSink, FuelAlert};
pub use monitor::{
    fuel_severity, FuelMonitor, MonitorConfig, EXIT_RESTART, EXIT_SHUTDOWN, EXIT_SIGNAL,
};
pub use notify::{NotificationConfig, NotificationTracker};
pub use resolver::Resolver;
