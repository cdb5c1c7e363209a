//! Discord front end for POSbot.
//!
//! Hosts the Serenity gateway client, the `!pos` chat command surface and
//! the channel alert sink the fuel monitor delivers through. Commands are
//! honored only in the configured guild and channel; operational commands
//! (stats, restart, shutdown) are gated on a configured admin role.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bot;
mod command;
mod config;
mod format;
mod handler;
mod sink;

pub use bot::PosbotBot;
pub use command::{parse_command, PosCommand};
pub use config::DiscordConfig;
pub use format::{
    format_ttl, list_embed, moonify, pos_embed, state_style, stats_embed, COLOR_BLUE, COLOR_GREEN,
    COLOR_ORANGE, COLOR_RED, COLOR_WHITE,
};
pub use handler::PosbotHandler;
pub use sink::ChannelAlertSink;
