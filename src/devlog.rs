// src/devlog.rs
// Dev-only scoring diagnostics. Never logs raw text, only a short hash id.

use tracing::info;

/// AFINN_DEV_LOG=1 AND dev env (debug build or SHUTTLE_ENV in {local,development,dev})
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var("AFINN_DEV_LOG").ok().as_deref() == Some("1");
    on && is_dev_env()
}

pub(crate) fn is_dev_env() -> bool {
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

pub(crate) fn truncate_vec<T: ToString>(v: &[T], max: usize) -> Vec<String> {
    v.iter().take(max).map(|x| x.to_string()).collect()
}

pub(crate) fn dev_log_score(strategy: &str, text: &str, matches: &[String], score: f64) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(text);
    let matched = truncate_vec(matches, 5);
    info!(
        target: "afinn",
        %id, %score, strategy,
        hits = matches.len(),
        matched = ?matched
    );
}
