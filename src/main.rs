//! ToxiGuard — Binary Entrypoint
//! Boots the Axum HTTP server: config, model artifact (fail fast), router.
//!
//! See `README.md` for quickstart; train the model first with `cargo run --bin train`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toxiguard::api::{self, AppState};
use toxiguard::config::AppConfig;
use toxiguard::history::History;
use toxiguard::model::AbuseModel;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toxiguard=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::load().context("loading configuration")?;

    // The model artifact is mandatory: a missing or corrupt file halts startup
    // rather than serving with an unusable classifier.
    let model = AbuseModel::load(&config.model_path)?;

    let state = AppState {
        model: Arc::new(model),
        history: Arc::new(History::with_capacity(config.history_capacity)),
    };
    let app = api::router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "toxiguard listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
