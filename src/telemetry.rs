use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::Config;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default of debug output for this crate.
pub fn init_telemetry(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug,tower_http=info", env!("CARGO_CRATE_NAME")).into());

    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!(
        "Tracing initialized for {} v{} in {:?}",
        config.app.name,
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );
    Ok(())
}
