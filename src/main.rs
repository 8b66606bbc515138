use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use asha_ehr::{config, create_router, db::Store, telemetry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = config::init()?;
    telemetry::init_telemetry(config)?;

    if !config.app.translations_dir.exists() {
        info!(
            "Translations directory {:?} not found, built-in English will be used",
            config.app.translations_dir
        );
    }

    let state = AppState::new(config.clone(), Store::with_demo_data());
    let app = create_router(state);

    let addr = config.server_addr();
    info!("{} listening on {}", config.app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
