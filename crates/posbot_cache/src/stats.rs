//! Command usage and error counters.
//!
//! Ancillary bookkeeping for the stats command. Recording is best-effort:
//! a failed increment is logged and swallowed so a counter hiccup never
//! breaks command handling.

use crate::key::{KEY_COMMAND_ERROR, KEY_COMMAND_USAGE};
use crate::{CacheBackend, CacheKey};
use posbot_error::PosbotResult;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Usage and error counts for one command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandStat {
    /// Successful invocations
    pub usage: u64,
    /// Failed invocations
    pub error: u64,
}

/// Counter store for chat command statistics.
#[derive(Clone)]
pub struct CommandStats {
    backend: Arc<dyn CacheBackend>,
}

impl CommandStats {
    /// Wrap a backend.
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Record one use of a command.
    pub fn record_usage(&self, command: &str) {
        let key = CacheKey::CommandUsage(command.to_string()).encode();
        if let Err(e) = self.backend.incr(&key) {
            tracing::warn!(command, error = %e, "Failed to record command usage");
        }
    }

    /// Record one failed use of a command.
    pub fn record_error(&self, command: &str) {
        let key = CacheKey::CommandError(command.to_string()).encode();
        if let Err(e) = self.backend.incr(&key) {
            tracing::warn!(command, error = %e, "Failed to record command error");
        }
    }

    /// Collect per-command usage and error counts.
    pub fn collect(&self) -> PosbotResult<BTreeMap<String, CommandStat>> {
        let mut stats: BTreeMap<String, CommandStat> = BTreeMap::new();

        for key in self.backend.scan(KEY_COMMAND_USAGE)? {
            let Some(command) = key.strip_prefix(KEY_COMMAND_USAGE).and_then(strip_separator)
            else {
                continue;
            };
            stats.entry(command.to_string()).or_default().usage = self.read_counter(&key);
        }

        for key in self.backend.scan(KEY_COMMAND_ERROR)? {
            let Some(command) = key.strip_prefix(KEY_COMMAND_ERROR).and_then(strip_separator)
            else {
                continue;
            };
            stats.entry(command.to_string()).or_default().error = self.read_counter(&key);
        }

        Ok(stats)
    }

    fn read_counter(&self, key: &str) -> u64 {
        match self.backend.get(key) {
            Ok(Some(blob)) => std::str::from_utf8(&blob)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read counter");
                0
            }
        }
    }
}

fn strip_separator(rest: &str) -> Option<&str> {
    rest.strip_prefix(':').filter(|s| !s.is_empty())
}
