//! Gateway event handler and chat command dispatch.

use crate::command::{parse_command, PosCommand};
use crate::config::DiscordConfig;
use crate::format;
use posbot_cache::CommandStats;
use posbot_error::PosbotErrorKind;
use posbot_monitor::{MonitorConfig, Resolver, EXIT_RESTART, EXIT_SHUTDOWN};
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::client::{Context, EventHandler};
use serenity::gateway::ActivityData;
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::{ChannelId, GuildId, RoleId};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Serenity event handler for the `!pos` command surface.
///
/// Commands are only honored in the configured guild and channel.
/// Operational commands additionally require the admin role on the message
/// author. Restart and shutdown requests are forwarded on the shutdown
/// channel as exit codes for the supervisor.
pub struct PosbotHandler {
    resolver: Arc<Resolver>,
    stats: CommandStats,
    config: DiscordConfig,
    thresholds: MonitorConfig,
    shutdown: watch::Sender<Option<i32>>,
    started: Instant,
}

impl PosbotHandler {
    /// Create the handler.
    pub fn new(
        resolver: Arc<Resolver>,
        stats: CommandStats,
        config: DiscordConfig,
        thresholds: MonitorConfig,
        shutdown: watch::Sender<Option<i32>>,
    ) -> Self {
        Self {
            resolver,
            stats,
            config,
            thresholds,
            shutdown,
            started: Instant::now(),
        }
    }

    /// Gateway intents the command surface needs.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }

    fn channel(&self) -> ChannelId {
        ChannelId::new(*self.config.channel_id())
    }

    fn is_relevant(&self, msg: &Message) -> bool {
        msg.guild_id == Some(GuildId::new(*self.config.guild_id()))
            && msg.channel_id == self.channel()
    }

    fn is_admin(&self, msg: &Message) -> bool {
        let role = RoleId::new(*self.config.admin_role_id());
        msg.member
            .as_deref()
            .map(|member| member.roles.contains(&role))
            .unwrap_or(false)
    }

    async fn say(&self, ctx: &Context, text: impl Into<String>) {
        if let Err(e) = self.channel().say(&ctx.http, text.into()).await {
            warn!(error = %e, "Failed to send channel message");
        }
    }

    async fn send_embed(&self, ctx: &Context, embed: CreateEmbed) {
        let message = CreateMessage::new().embed(embed);
        if let Err(e) = self.channel().send_message(&ctx.http, message).await {
            warn!(error = %e, "Failed to send channel embed");
        }
    }

    async fn typing(&self, ctx: &Context) {
        let _ = self.channel().broadcast_typing(&ctx.http).await;
    }

    async fn refuse(&self, ctx: &Context, msg: &Message, command: &'static str) {
        info!(
            author = %msg.author.name,
            command,
            "Non-admin attempted an operational command, ignoring"
        );
        self.stats.record_error(command);
        self.say(
            ctx,
            format!(
                "You don't have permission to do that, <@{}> :rage: I'll just be ignoring you, alright? :zipper_mouth:",
                msg.author.id
            ),
        )
        .await;
    }

    async fn handle_help(&self, ctx: &Context, msg: &Message, is_admin: bool) {
        let monitored = match self.resolver.monitored_ids().await {
            Ok(ids) => ids.len(),
            Err(e) => {
                self.stats.record_error("help");
                warn!(error = %e, "Failed to get monitored POS IDs for help command");
                0
            }
        };

        self.say(
            ctx,
            format!(
                "Hey <@{}>, I'm **POSbot**, glad to meet you :slight_smile: I am keeping track of EVE Online POSes for you. At the moment, I'm monitoring {} POSes.",
                msg.author.id, monitored
            ),
        )
        .await;
        self.say(
            ctx,
            "You can use various commands to query information about POS statuses, but I'll also shout at you if something is about to go wrong :smile:",
        )
        .await;
        self.say(
            ctx,
            "A list of POSes can be displayed via `!pos list`, `!pos fuel` will show an overview of fuel for monitored POSes. `!pos details POSID` tells you more about a specific starbase. `!pos` or `!pos help` displays this help message. That's about it for now!",
        )
        .await;
        if is_admin {
            self.say(
                ctx,
                "Oh wait, you're super \"important\" :nerd: You can also use `!pos stats` to display performance stats, `!pos restart` to restart the bot or `!pos shutdown` to shut it down completely :skull:",
            )
            .await;
        }

        self.stats.record_usage("help");
    }

    async fn handle_list(&self, ctx: &Context, msg: &Message) {
        let list = match self.resolver.starbase_list().await {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "Failed to retrieve starbase list for chat command");
                self.stats.record_error("list");
                self.say(
                    ctx,
                    format!(
                        "It appears like I can't retrieve a list of POSes at the moment :neutral_face: My deepest apologies, <@{}>",
                        msg.author.id
                    ),
                )
                .await;
                return;
            }
        };

        let total = list.starbases().len();
        self.say(
            ctx,
            format!(
                "There is currently **{}** POSes visible to me, including both monitored and ignored structures.",
                total
            ),
        )
        .await;
        self.typing(ctx).await;

        for (index, starbase) in list.starbases().iter().enumerate() {
            let location = self.resolver.location_label(*starbase.moon_id());
            let owner = self
                .resolver
                .owner_label(*starbase.standing_owner_id())
                .await;
            let monitored = self.resolver.is_monitored(*starbase.id());
            let embed = format::list_embed(
                index,
                total,
                &location,
                *starbase.state(),
                monitored,
                &owner,
                *list.cached_until(),
            );
            self.send_embed(ctx, embed).await;
            self.typing(ctx).await;
        }

        self.say(
            ctx,
            "You can request additional information about a POS - like its current fuel status - using `!pos details POSID`.",
        )
        .await;
        self.stats.record_usage("list");
    }

    async fn handle_fuel(&self, ctx: &Context, msg: &Message) {
        if let Err(e) = self.resolver.update_monitored_details().await {
            warn!(error = %e, "Failed to update monitored starbase details for chat command");
            self.stats.record_error("fuel");
            self.say(
                ctx,
                format!(
                    "It appears like I can't update the POS details at the moment :neutral_face: My deepest apologies, <@{}>",
                    msg.author.id
                ),
            )
            .await;
            return;
        }

        let monitored = match self.resolver.monitored_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "Failed to retrieve monitored starbase IDs for chat command");
                self.stats.record_error("fuel");
                self.say(
                    ctx,
                    format!(
                        "It appears like I can't retrieve a list of monitored POSes at the moment :neutral_face: My deepest apologies, <@{}>",
                        msg.author.id
                    ),
                )
                .await;
                return;
            }
        };

        self.say(
            ctx,
            format!("I am currently monitoring **{}** POSes.", monitored.len()),
        )
        .await;
        self.typing(ctx).await;

        let total = monitored.len();
        for (index, starbase_id) in monitored.into_iter().enumerate() {
            let pos = match self.resolver.pos(starbase_id).await {
                Ok(pos) => pos,
                Err(e) => {
                    warn!(starbase_id, error = %e, "Failed to get POS for chat command");
                    continue;
                }
            };
            let title = format!(":stars: POS {}/{}", index + 1, total);
            self.send_embed(ctx, format::pos_embed(&pos, title, &self.thresholds))
                .await;
            self.typing(ctx).await;
        }

        self.say(
            ctx,
            format!(
                "I will shout at you if a POS should fall under {}h fuel remaining (warning, *orange*) and absolutely flip out at {}h fuel left (critical, *red*) :hugging:",
                self.thresholds.fuel_warning_hours, self.thresholds.fuel_critical_hours
            ),
        )
        .await;
        self.stats.record_usage("fuel");
    }

    async fn handle_details(&self, ctx: &Context, msg: &Message, starbase_id: i64) {
        let pos = match self.resolver.pos(starbase_id).await {
            Ok(pos) => pos,
            Err(e) => {
                self.stats.record_error("details");
                if matches!(e.kind(), PosbotErrorKind::NotFound(_)) {
                    self.say(
                        ctx,
                        format!(
                            "<@{}>: I can't see a POS with ID {} anywhere :mag: Maybe check `!pos list`?",
                            msg.author.id, starbase_id
                        ),
                    )
                    .await;
                } else {
                    warn!(starbase_id, error = %e, "Failed to get POS for chat command");
                    self.say(
                        ctx,
                        format!(
                            "It appears like I can't retrieve that POS at the moment :neutral_face: My deepest apologies, <@{}>",
                            msg.author.id
                        ),
                    )
                    .await;
                }
                return;
            }
        };

        let title = format!(":stars: POS {}", starbase_id);
        self.send_embed(ctx, format::pos_embed(&pos, title, &self.thresholds))
            .await;
        self.stats.record_usage("details");
    }

    async fn handle_stats(&self, ctx: &Context) {
        let stats = match self.stats.collect() {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "Failed to retrieve command stats");
                self.stats.record_error("stats");
                self.say(
                    ctx,
                    ":poop: Seems like there was an error processing this command :poop:",
                )
                .await;
                return;
            }
        };

        let embed = format::stats_embed(env!("CARGO_PKG_VERSION"), self.started.elapsed(), &stats);
        self.send_embed(ctx, embed).await;
        self.stats.record_usage("stats");
    }

    async fn handle_restart(&self, ctx: &Context) {
        self.say(ctx, ":robot: POSbot restarting, back in a bit :arrows_counterclockwise:")
            .await;
        self.stats.record_usage("restart");
        if self.shutdown.send(Some(EXIT_RESTART)).is_err() {
            warn!("Shutdown channel closed, restart signal dropped");
        }
    }

    async fn handle_shutdown(&self, ctx: &Context) {
        self.say(ctx, ":robot: POSbot shutting down :skull_crossbones:")
            .await;
        self.stats.record_usage("shutdown");
        if self.shutdown.send(Some(EXIT_SHUTDOWN)).is_err() {
            warn!("Shutdown channel closed, shutdown signal dropped");
        }
    }
}

#[async_trait::async_trait]
impl EventHandler for PosbotHandler {
    #[instrument(skip(self, ctx, ready), fields(user = %ready.user.name))]
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Connected to the Discord gateway");
        ctx.set_activity(Some(ActivityData::playing("Starbase Online")));
        if *self.config.debug() {
            self.say(&ctx, ":robot: POSbot online and ready to serve :rocket:")
                .await;
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || !self.is_relevant(&msg) {
            return;
        }
        let Some(command) = parse_command(&msg.content) else {
            return;
        };

        self.typing(&ctx).await;
        let is_admin = self.is_admin(&msg);
        info!(
            author = %msg.author.name,
            command = command.name(),
            is_admin,
            "Processing POS chat command"
        );

        match command {
            PosCommand::Help => self.handle_help(&ctx, &msg, is_admin).await,
            PosCommand::List => self.handle_list(&ctx, &msg).await,
            PosCommand::Fuel => self.handle_fuel(&ctx, &msg).await,
            PosCommand::Details(starbase_id) => {
                self.handle_details(&ctx, &msg, starbase_id).await
            }
            PosCommand::DetailsMissingId => {
                self.stats.record_error("details");
                self.say(
                    &ctx,
                    format!(
                        "<@{}>: You'll have to tell me which POS you want to know more about...",
                        msg.author.id
                    ),
                )
                .await;
            }
            PosCommand::DetailsInvalidId(arg) => {
                debug!(arg = %arg, "Failed to parse starbase ID for details command");
                self.stats.record_error("details");
                self.say(
                    &ctx,
                    format!(
                        "<@{}>: Seems like you've provided an invalid POS ID \"{}\" :poop:",
                        msg.author.id, arg
                    ),
                )
                .await;
            }
            PosCommand::Stats if is_admin => self.handle_stats(&ctx).await,
            PosCommand::Restart if is_admin => self.handle_restart(&ctx).await,
            PosCommand::Shutdown if is_admin => self.handle_shutdown(&ctx).await,
            PosCommand::Stats => self.refuse(&ctx, &msg, "stats").await,
            PosCommand::Restart => self.refuse(&ctx, &msg, "restart").await,
            PosCommand::Shutdown => self.refuse(&ctx, &msg, "shutdown").await,
            PosCommand::Unknown => {
                self.say(
                    &ctx,
                    format!(
                        "<@{}> seems to be drunk, there's no command like this :thinking:",
                        msg.author.id
                    ),
                )
                .await;
            }
        }
    }
}
