// src/lib.rs
// Public library surface for the binary, integration tests and reuse.

pub mod api;
pub mod config;
pub mod devlog;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod metrics;
pub mod scorer;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::config::{AppConfig, LexiconRegistry};
pub use crate::error::LexiconError;
pub use crate::lexicon::{Lexicon, TokenKind};
pub use crate::matcher::{EmoticonCase, MatchOptions, Matcher};
pub use crate::scorer::{Scorer, ScorerHandle, ScorerOptions, Strategy};

/// Load configuration (file + env) and build the scorer it describes.
///
/// ```ignore
/// let scorer = afinn_scorer::scorer_from_env()?;
/// assert!(scorer.score("This is oh so bad.") < 0.0);
/// ```
pub fn scorer_from_env() -> anyhow::Result<Scorer> {
    let cfg = AppConfig::load_default()?;
    let scorer = Scorer::new(&cfg.lexicons, cfg.scorer)?;
    Ok(scorer)
}
