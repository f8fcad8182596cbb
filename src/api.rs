// src/api.rs
//! HTTP surface over the shared scorer.
//!
//! - `GET  /health`
//! - `POST /score`         `{ "text": "...", "strategy": "pattern" | "wordlist" }`
//! - `POST /find_all`      `{ "text": "...", "normalize_whitespace": true }`
//! - `POST /split`         `{ "text": "..." }`
//! - `POST /admin/reload`  rebuild from the configured lexicon files

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::scorer::{Scorer, ScorerHandle, Strategy};

#[derive(Clone)]
pub struct AppState {
    pub scorer: ScorerHandle,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the scorer described by `config` (loads lexicon files).
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let scorer = Scorer::new(&config.lexicons, config.scorer.clone())?;
        Ok(Self {
            scorer: ScorerHandle::new(scorer),
            config: Arc::new(config),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/score", post(score))
        .route("/find_all", post(find_all))
        .route("/split", post(split))
        .route("/admin/reload", post(admin_reload))
        .with_state(state)
}

#[derive(Deserialize)]
struct ScoreReq {
    text: String,
    #[serde(default)]
    strategy: Option<Strategy>,
}

#[derive(Serialize)]
struct ScoreResp {
    score: f64,
    matches: Vec<String>,
    strategy: Strategy,
}

#[derive(Deserialize)]
struct FindAllReq {
    text: String,
    #[serde(default)]
    normalize_whitespace: Option<bool>,
}

#[derive(Deserialize)]
struct SplitReq {
    text: String,
}

#[derive(Serialize)]
struct TokensResp {
    tokens: Vec<String>,
}

async fn score(State(state): State<AppState>, Json(body): Json<ScoreReq>) -> Json<ScoreResp> {
    let scorer = state.scorer.current();
    let strategy = body.strategy.unwrap_or(scorer.options().strategy);

    let matches = match strategy {
        Strategy::Pattern => scorer.find_all(&body.text),
        Strategy::Wordlist => scorer
            .split(&body.text)
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| scorer.lexicon().lookup(t).is_some())
            .collect(),
    };
    let score = scorer.score_with(strategy, &body.text);

    counter!("afinn_score_requests_total", "strategy" => strategy.as_str()).increment(1);
    histogram!("afinn_matches_per_text").record(matches.len() as f64);

    Json(ScoreResp {
        score,
        matches,
        strategy,
    })
}

async fn find_all(State(state): State<AppState>, Json(body): Json<FindAllReq>) -> Json<TokensResp> {
    let scorer = state.scorer.current();
    let normalize = body
        .normalize_whitespace
        .unwrap_or(scorer.options().normalize_whitespace);
    let tokens = scorer.find_all_with(&body.text, normalize);
    Json(TokensResp { tokens })
}

async fn split(State(state): State<AppState>, Json(body): Json<SplitReq>) -> Json<TokensResp> {
    Json(TokensResp {
        tokens: state.scorer.current().split(&body.text),
    })
}

async fn admin_reload(State(state): State<AppState>) -> (StatusCode, String) {
    let handle = state.scorer.clone();
    let config = Arc::clone(&state.config);
    let res = tokio::task::spawn_blocking(move || {
        handle.reload(&config.lexicons, config.scorer.clone())
    })
    .await;

    match res {
        Ok(Ok(())) => {
            counter!("afinn_reload_total").increment(1);
            info!(target: "afinn", "lexicon reloaded via admin endpoint");
            (StatusCode::OK, "reloaded".to_string())
        }
        Ok(Err(e)) => {
            counter!("afinn_reload_errors_total").increment(1);
            warn!(target: "afinn", error = %e, "admin reload failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("failed: {e}"))
        }
        Err(e) => {
            counter!("afinn_reload_errors_total").increment(1);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("failed: {e}"))
        }
    }
}
