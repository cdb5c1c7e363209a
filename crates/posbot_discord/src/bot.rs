//! Gateway client lifecycle.

use crate::handler::PosbotHandler;
use posbot_error::{DiscordError, DiscordErrorKind};
use serenity::gateway::ShardManager;
use serenity::http::Http;
use serenity::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// The POSbot gateway client.
///
/// Wraps the Serenity client so the facade can share the HTTP handle with
/// the alert sink and stop the gateway when the shutdown channel fires.
pub struct PosbotBot {
    client: Client,
}

impl PosbotBot {
    /// Build the client with the command handler attached.
    #[instrument(skip(token, handler), fields(token_len = token.len()))]
    pub async fn new(token: &str, handler: PosbotHandler) -> Result<Self, DiscordError> {
        info!("Building Serenity client");

        let client = Client::builder(token, PosbotHandler::intents())
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        Ok(Self { client })
    }

    /// Shared HTTP handle, for the alert sink.
    pub fn http(&self) -> Arc<Http> {
        self.client.http.clone()
    }

    /// Shard manager handle, for stopping the gateway from another task.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }

    /// Run the gateway connection until the shards shut down.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting Discord gateway client");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
