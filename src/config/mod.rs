// src/config/mod.rs
//! Application configuration: `config/afinn.toml` + env overrides.
//!
//! Resolution order:
//! 1) `$AFINN_CONFIG_PATH` (must exist)
//! 2) `config/afinn.toml`
//! 3) built-in defaults
//!
//! Then `$AFINN_DATA_DIR` and `$AFINN_LANGUAGE` override the file values.

pub mod lexicons;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub use self::lexicons::LexiconRegistry;
use crate::scorer::ScorerOptions;

pub const DEFAULT_CONFIG_PATH: &str = "config/afinn.toml";
pub const ENV_CONFIG_PATH: &str = "AFINN_CONFIG_PATH";
pub const ENV_DATA_DIR: &str = "AFINN_DATA_DIR";
pub const ENV_LANGUAGE: &str = "AFINN_LANGUAGE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scorer: ScorerOptions,
    #[serde(default)]
    pub lexicons: LexiconRegistry,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(s).context("parsing afinn config")?;
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading afinn config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load with env + fallbacks (see module docs).
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let pb = PathBuf::from(DEFAULT_CONFIG_PATH);
            if pb.exists() {
                Self::load_from(&pb)?
            } else {
                Self::default()
            }
        };
        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Some(dir) = non_empty_env(ENV_DATA_DIR) {
            self.lexicons.data_dir = PathBuf::from(dir);
        }
        if let Some(lang) = non_empty_env(ENV_LANGUAGE) {
            self.scorer.language = lang;
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
