//! Discord connection settings.

use posbot_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Connection and channel configuration for the Discord front end.
///
/// The bot listens in exactly one channel of one guild; everything else is
/// ignored. Operational commands are gated on `admin_role_id`.
#[derive(Debug, Clone, Serialize, Deserialize, derive_getters::Getters)]
pub struct DiscordConfig {
    /// Bot token from the Discord developer portal
    token: String,
    /// Guild the bot listens in
    guild_id: u64,
    /// Channel for commands and fuel alerts
    channel_id: u64,
    /// Role whose members may run operational commands
    admin_role_id: u64,
    /// Mirror background refresh failures to the channel
    #[serde(default)]
    verbose: bool,
    /// Send startup and shutdown courtesy messages
    #[serde(default)]
    debug: bool,
}

impl DiscordConfig {
    /// Check that every required field carries a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::new("Discord config missing required token"));
        }
        if self.guild_id == 0 {
            return Err(ConfigError::new("Discord config missing required guild_id"));
        }
        if self.channel_id == 0 {
            return Err(ConfigError::new(
                "Discord config missing required channel_id",
            ));
        }
        if self.admin_role_id == 0 {
            return Err(ConfigError::new(
                "Discord config missing required admin_role_id",
            ));
        }
        Ok(())
    }
}
