use dotenv::dotenv;
use tracing::info;

use asha_ehr::{config, i18n::seed::seed_translations, telemetry};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = config::init()?;
    telemetry::init_telemetry(config)?;

    let written = seed_translations(&config.app.translations_dir)?;
    info!(
        "Translation files created successfully ({} languages)",
        written.len()
    );

    Ok(())
}
