//! AFINN scoring service: binary entrypoint.
//! Boots the Axum HTTP server, wiring the shared scorer, metrics and hot reload.

use anyhow::Context;
use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use afinn_scorer::api::{self, AppState};
use afinn_scorer::config::AppConfig;
use afinn_scorer::devlog::dev_logging_enabled;
use afinn_scorer::metrics::Metrics;
use afinn_scorer::scorer::start_hot_reload_thread;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - AFINN_DEV_LOG=1
fn enable_dev_tracing() {
    if !dev_logging_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("afinn=info,lexicon=info,matcher=debug,warn"));

    // Shuttle may already have installed a global subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let cfg = AppConfig::load_default().context("loading afinn config")?;
    let state = AppState::from_config(cfg).context("building scorer")?;

    start_hot_reload_thread(
        state.scorer.clone(),
        state.config.lexicons.clone(),
        state.config.scorer.clone(),
    );

    let mut router = api::router(state);
    match Metrics::init() {
        Ok(m) => router = router.merge(m.router()),
        Err(e) => tracing::warn!(error = %e, "metrics recorder not installed"),
    }

    Ok(router.into())
}
