// src/metrics.rs
use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "afinn_score_requests_total",
            "Texts scored, labelled by strategy."
        );
        describe_counter!("afinn_reload_total", "Successful lexicon reloads.");
        describe_counter!("afinn_reload_errors_total", "Failed lexicon reloads.");
        describe_histogram!(
            "afinn_matches_per_text",
            "Lexicon tokens matched per scored text."
        );
    });
}

impl Metrics {
    /// Install the Prometheus recorder. Fails if another recorder is already set.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
