// src/scorer.rs
//! Scorer facade: registry + options → ready-to-use sentiment scorer.
//!
//! - `Scorer` is immutable once built; share it freely across threads.
//! - `ScorerHandle` wraps the current scorer for build-then-swap reloads.
//! - `start_hot_reload_thread` polls the lexicon files in dev/local.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::LexiconRegistry;
use crate::devlog::{dev_log_score, is_dev_env};
use crate::error::Result;
use crate::lexicon::{Lexicon, TokenKind};
use crate::matcher::{EmoticonCase, MatchOptions, Matcher};
use crate::tokenize;

/// Which scoring function `Scorer::score` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Compiled phrase matcher (phrases, emoticons, boundaries).
    #[default]
    Pattern,
    /// Word split + per-token lookup.
    Wordlist,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Pattern => "pattern",
            Strategy::Wordlist => "wordlist",
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScorerOptions {
    #[serde(default = "default_language")]
    pub language: String,
    /// Merge the emoticon list and match it without word boundaries.
    #[serde(default)]
    pub emoticons: bool,
    #[serde(default = "default_true")]
    pub word_boundary: bool,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub emoticon_case: EmoticonCase,
    #[serde(default = "default_true")]
    pub normalize_whitespace: bool,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            language: default_language(),
            emoticons: false,
            word_boundary: true,
            strategy: Strategy::Pattern,
            emoticon_case: EmoticonCase::Lowercase,
            normalize_whitespace: true,
        }
    }
}

impl ScorerOptions {
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = code.into();
        self
    }

    pub fn with_emoticons(mut self, on: bool) -> Self {
        self.emoticons = on;
        self
    }

    pub fn with_word_boundary(mut self, on: bool) -> Self {
        self.word_boundary = on;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_emoticon_case(mut self, case: EmoticonCase) -> Self {
        self.emoticon_case = case;
        self
    }

    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            include_emoticons: self.emoticons,
            word_boundary: self.word_boundary,
            emoticon_case: self.emoticon_case,
        }
    }
}

#[derive(Debug)]
pub struct Scorer {
    matcher: Matcher,
    options: ScorerOptions,
}

impl Scorer {
    /// Load the language's word list (plus emoticons if asked) and compile.
    pub fn new(registry: &LexiconRegistry, options: ScorerOptions) -> Result<Self> {
        let word_path = registry.resolve(&options.language)?;
        let mut lexicon = Lexicon::from_file(&word_path, TokenKind::Word)?;
        if options.emoticons {
            let emoticons = Lexicon::from_file(&registry.emoticon_path(), TokenKind::Emoticon)?;
            lexicon = lexicon.merge(emoticons);
        }
        let scorer = Self::from_lexicon(lexicon, options)?;
        info!(
            target: "afinn",
            language = %scorer.options.language,
            entries = scorer.lexicon().len(),
            emoticons = scorer.options.emoticons,
            strategy = scorer.options.strategy.as_str(),
            "scorer ready"
        );
        Ok(scorer)
    }

    /// Build from an in-memory lexicon; `options.language` is informational only.
    pub fn from_lexicon(lexicon: Lexicon, options: ScorerOptions) -> Result<Self> {
        let matcher = Matcher::compile(lexicon, &options.match_options())?;
        Ok(Self { matcher, options })
    }

    pub fn options(&self) -> &ScorerOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.matcher.lexicon()
    }

    /// Score with the configured strategy.
    pub fn score(&self, text: &str) -> f64 {
        self.score_with(self.options.strategy, text)
    }

    pub fn score_with(&self, strategy: Strategy, text: &str) -> f64 {
        match strategy {
            Strategy::Pattern => self.score_by_pattern(text),
            Strategy::Wordlist => self.score_by_tokenlist(text),
        }
    }

    pub fn score_by_pattern(&self, text: &str) -> f64 {
        let matches = self.find_all(text);
        let score = matches
            .iter()
            .filter_map(|t| self.lexicon().lookup(t))
            .map(f64::from)
            .sum();
        dev_log_score(Strategy::Pattern.as_str(), text, &matches, score);
        score
    }

    pub fn score_by_tokenlist(&self, text: &str) -> f64 {
        let score = tokenize::score_with_wordlist(self.lexicon(), text);
        dev_log_score(Strategy::Wordlist.as_str(), text, &[], score);
        score
    }

    /// Matched lexicon tokens, left to right.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.find_all_with(text, self.options.normalize_whitespace)
    }

    /// `find_all` with an explicit whitespace-normalization choice.
    pub fn find_all_with(&self, text: &str, normalize_whitespace: bool) -> Vec<String> {
        self.matcher.find_all(text, normalize_whitespace)
    }

    /// Valence of every match, in match order.
    pub fn scores(&self, text: &str) -> Vec<i32> {
        self.find_all(text)
            .iter()
            .filter_map(|t| self.lexicon().lookup(t))
            .collect()
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        tokenize::split(text)
    }
}

/* ----------------------------
Thread-safe handle + reload
---------------------------- */

/// Shared, swappable scorer. Readers take an `Arc` snapshot; reloads build a
/// fresh `Scorer` outside the lock and swap it in.
#[derive(Clone, Debug)]
pub struct ScorerHandle {
    inner: Arc<RwLock<Arc<Scorer>>>,
}

impl ScorerHandle {
    pub fn new(scorer: Scorer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(scorer))),
        }
    }

    /// Snapshot of the scorer in use right now.
    pub fn current(&self) -> Arc<Scorer> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn score(&self, text: &str) -> f64 {
        self.current().score(text)
    }

    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.current().find_all(text)
    }

    pub fn replace(&self, scorer: Scorer) {
        let fresh = Arc::new(scorer);
        match self.inner.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
    }

    /// Rebuild from files and swap. On error the old scorer stays in place.
    pub fn reload(&self, registry: &LexiconRegistry, options: ScorerOptions) -> Result<()> {
        let fresh = Scorer::new(registry, options)?;
        self.replace(fresh);
        Ok(())
    }
}

/// Returns true if we should enable hot reload (dev/local only).
fn hot_reload_enabled() -> bool {
    let want = std::env::var("AFINN_HOT_RELOAD")
        .ok()
        .map(|v| v == "1")
        .unwrap_or(false);
    want && is_dev_env()
}

fn watched_files(registry: &LexiconRegistry, options: &ScorerOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(p) = registry.resolve(&options.language) {
        files.push(p);
    }
    if options.emoticons {
        files.push(registry.emoticon_path());
    }
    files
}

fn newest_mtime(files: &[PathBuf]) -> Option<SystemTime> {
    files
        .iter()
        .filter_map(|p| std::fs::metadata(p).and_then(|m| m.modified()).ok())
        .max()
}

/// Poll the lexicon files every 2s and reload `handle` when they change.
pub fn start_hot_reload_thread(
    handle: ScorerHandle,
    registry: LexiconRegistry,
    options: ScorerOptions,
) {
    if !hot_reload_enabled() {
        return;
    }

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let files = watched_files(&registry, &options);
        let mut last_mtime = newest_mtime(&files);

        loop {
            thread::sleep(poll);
            let Some(mtime) = newest_mtime(&files) else {
                continue;
            };
            if last_mtime.is_some_and(|prev| mtime <= prev) {
                continue;
            }
            match handle.reload(&registry, options.clone()) {
                Ok(()) => info!(target: "afinn", "lexicon hot-reloaded"),
                Err(e) => warn!(target: "afinn", error = %e, "hot reload failed; keeping previous lexicon"),
            }
            last_mtime = Some(mtime);
        }
    });
}
