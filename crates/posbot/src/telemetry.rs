//! Tracing subscriber setup.

use crate::cli::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` lifts the workspace
/// crates to debug while keeping the gateway library quieter. Production
/// runs emit JSON for log ingestion.
pub fn init(verbose: bool, env: Environment) {
    let default_filter = if verbose {
        "debug,serenity=info,tracing=info"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    match env {
        Environment::Prod => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        Environment::Dev => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
