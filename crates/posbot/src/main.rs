//! POSbot binary: configuration, wiring and lifecycle.
//!
//! Builds the cache, API client, database repository, resolver, fuel
//! monitor and Discord client, then runs until the shutdown channel fires.
//! The process exit code tells the supervisor what happened: 0 for a clean
//! shutdown, 1 to request a restart, 2 after an OS signal.

mod cli;
mod config;
mod telemetry;

use clap::Parser;
use cli::Cli;
use config::Config;
use posbot_api::ApiClient;
use posbot_cache::{CacheBackend, CommandStats, MemoryBackend, TypedCache};
use posbot_database::LocationRepository;
use posbot_discord::{ChannelAlertSink, DiscordConfig, PosbotBot, PosbotHandler};
use posbot_error::PosbotResult;
use posbot_monitor::{
    AlertSink, FuelMonitor, NotificationTracker, Resolver, EXIT_SHUTDOWN, EXIT_SIGNAL,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose, cli.env);

    match run(cli).await {
        Ok(code) => {
            info!(code, "POSbot stopped");
            std::process::exit(code);
        }
        Err(e) => {
            error!(error = %e, "POSbot failed");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> PosbotResult<i32> {
    dotenvy::dotenv().ok();

    info!(config = %cli.config.display(), "Loading configuration");
    let config = Config::from_file(&cli.config)?;
    let discord: DiscordConfig = config.discord().connection().clone();

    let backend: Arc<dyn CacheBackend> = Arc::new(MemoryBackend::new());
    let cache = TypedCache::new(backend.clone());
    let stats = CommandStats::new(backend.clone());
    let tracker = NotificationTracker::new(backend.clone(), config.notification_config());

    let api = Arc::new(ApiClient::new(config.eve().api())?);
    match api.server_status().await {
        Ok(status) => info!(
            server_open = *status.server_open(),
            online_players = *status.online_players(),
            "EVE API reachable"
        ),
        Err(e) => warn!(error = %e, "EVE API status probe failed, continuing anyway"),
    }

    let locations = Arc::new(LocationRepository::connect(config.database().url())?);

    let resolver = Arc::new(Resolver::new(
        api.clone(),
        api,
        locations,
        cache,
        config.eve().ignored_starbases().clone(),
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(None);

    let handler = PosbotHandler::new(
        resolver.clone(),
        stats,
        discord.clone(),
        config.monitor_config(),
        shutdown_tx.clone(),
    );

    let mut bot = PosbotBot::new(discord.token(), handler).await?;
    let sink = Arc::new(ChannelAlertSink::new(bot.http(), *discord.channel_id()));
    let courtesy_sink = sink.clone();

    let monitor = FuelMonitor::new(
        resolver,
        tracker,
        sink,
        config.monitor_config(),
        shutdown_rx.clone(),
    );
    let monitor_task = tokio::spawn(monitor.run());

    let signal_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Termination signal received");
        let _ = signal_tx.send(Some(EXIT_SIGNAL));
    });

    // Waits for the shutdown code, stops the gateway, reports the code back.
    let shard_manager = bot.shard_manager();
    let debug = *discord.debug();
    let mut stop_rx = shutdown_rx;
    let stopper = tokio::spawn(async move {
        loop {
            if stop_rx.changed().await.is_err() {
                shard_manager.shutdown_all().await;
                return EXIT_SHUTDOWN;
            }
            let code = *stop_rx.borrow_and_update();
            if let Some(code) = code {
                // Admin commands announce themselves; only signal shutdowns
                // get the courtesy message, and only in debug mode.
                if debug && code == EXIT_SIGNAL {
                    let _ = courtesy_sink
                        .status(":robot: POSbot shutting down :skull_crossbones:")
                        .await;
                }
                shard_manager.shutdown_all().await;
                return code;
            }
        }
    });

    info!("POSbot wired up, connecting to Discord");
    bot.start().await?;

    if let Err(e) = monitor_task.await {
        warn!(error = %e, "Monitor task did not stop cleanly");
    }
    let code = stopper.await.unwrap_or(EXIT_SHUTDOWN);
    Ok(code)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
