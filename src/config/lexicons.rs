// src/config/lexicons.rs
//! Which lexicon file backs which language code.
//!
//! TOML shape (section `[lexicons]` of `config/afinn.toml`):
//!
//! ```toml
//! data_dir = "data"
//! emoticons = "AFINN-emoticon.txt"
//!
//! [languages]
//! en = "AFINN-en.txt"
//! da = "AFINN-da.txt"
//! ```
//!
//! Relative file names are resolved against `data_dir`; absolute ones are
//! used as-is.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LexiconError, Result};

pub const DEFAULT_DATA_DIR: &str = "data";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_languages() -> BTreeMap<String, PathBuf> {
    let mut languages = BTreeMap::new();
    languages.insert("en".to_string(), PathBuf::from("AFINN-en.txt"));
    languages.insert("da".to_string(), PathBuf::from("AFINN-da.txt"));
    languages
}

fn default_emoticons() -> PathBuf {
    PathBuf::from("AFINN-emoticon.txt")
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LexiconRegistry {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Language code → word file.
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, PathBuf>,
    #[serde(default = "default_emoticons")]
    pub emoticons: PathBuf,
}

impl Default for LexiconRegistry {
    fn default() -> Self {
        Self::default_seed(default_data_dir())
    }
}

impl LexiconRegistry {
    /// The bundled English + Danish lists under `data_dir`.
    pub fn default_seed(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            languages: default_languages(),
            emoticons: default_emoticons(),
        }
    }

    /// Word file for `code` (case-insensitive), or `UnknownLanguage`.
    pub fn resolve(&self, code: &str) -> Result<PathBuf> {
        let wanted = code.trim().to_ascii_lowercase();
        self.languages
            .iter()
            .find(|(k, _)| k.to_ascii_lowercase() == wanted)
            .map(|(_, file)| self.full_path(file))
            .ok_or_else(|| LexiconError::UnknownLanguage(code.to_string()))
    }

    pub fn emoticon_path(&self) -> PathBuf {
        self.full_path(&self.emoticons)
    }

    /// Known language codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.keys().map(String::as_str)
    }

    fn full_path(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes_against_data_dir() {
        let reg = LexiconRegistry::default_seed("/srv/afinn");
        assert_eq!(
            reg.resolve("en").unwrap(),
            PathBuf::from("/srv/afinn/AFINN-en.txt")
        );
        assert_eq!(
            reg.resolve(" DA ").unwrap(),
            PathBuf::from("/srv/afinn/AFINN-da.txt")
        );
        assert_eq!(
            reg.emoticon_path(),
            PathBuf::from("/srv/afinn/AFINN-emoticon.txt")
        );
        assert_eq!(reg.codes().collect::<Vec<_>>(), vec!["da", "en"]);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let reg = LexiconRegistry::default();
        let err = reg.resolve("tr").unwrap_err();
        assert!(matches!(err, LexiconError::UnknownLanguage(c) if c == "tr"));
    }

    #[test]
    fn absolute_entries_bypass_data_dir() {
        let reg: LexiconRegistry = toml::from_str(
            r#"
data_dir = "data"
[languages]
sv = "/opt/lex/AFINN-sv.txt"
"#,
        )
        .unwrap();
        assert_eq!(
            reg.resolve("sv").unwrap(),
            PathBuf::from("/opt/lex/AFINN-sv.txt")
        );
        assert_eq!(reg.emoticon_path(), PathBuf::from("data/AFINN-emoticon.txt"));
    }
}
