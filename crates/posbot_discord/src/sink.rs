//! Channel delivery of scheduler alerts.

use async_trait::async_trait;
use posbot_core::{format_hours, Severity};
use posbot_error::{DiscordError, DiscordErrorKind, PosbotResult};
use posbot_monitor::{AlertSink, FuelAlert};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{info, instrument};

/// Delivers fuel alerts and status mirrors to the configured channel.
///
/// Shares the gateway client's HTTP handle so alerts ride the same rate
/// limiter as command replies.
pub struct ChannelAlertSink {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelAlertSink {
    /// Create a sink targeting one channel.
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    async fn send(&self, text: String) -> PosbotResult<()> {
        self.channel_id
            .say(&self.http, text)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::SendFailed(e.to_string())))?;
        Ok(())
    }
}

#[async_trait]
impl AlertSink for ChannelAlertSink {
    #[instrument(
        skip(self, alert),
        fields(
            starbase_id = *alert.starbase_id(),
            fuel_type_id = *alert.fuel_type_id(),
            severity = ?alert.severity(),
        )
    )]
    async fn alert(&self, alert: &FuelAlert) -> PosbotResult<()> {
        let remaining = format_hours(*alert.hours_remaining());
        let text = match alert.severity() {
            Severity::Critical => format!(
                "@everyone :rotating_light: POS at **{}** (owned by {}) only has __**{}**__ of fuel **{}** left. FIX THIS SHIT NOW :rage:",
                alert.location_name(),
                alert.owner_name(),
                remaining,
                alert.fuel_type_name()
            ),
            Severity::Warning => format!(
                "@here :alarm_clock: POS at **{}** (owned by {}) has **{}** of fuel **{}** left, someone should probably check that :thinking:",
                alert.location_name(),
                alert.owner_name(),
                remaining,
                alert.fuel_type_name()
            ),
            Severity::Nominal => return Ok(()),
        };

        self.send(text).await?;
        info!("Fuel notification sent");
        Ok(())
    }

    async fn status(&self, message: &str) -> PosbotResult<()> {
        self.send(message.to_string()).await
    }
}
