// src/lexicon.rs
//! Token → valence lookup table.
//!
//! Lexicon files are plain UTF-8, one `<token><TAB><integer>` entry per line,
//! no header and no comments. Keys are stored exactly as read (no case
//! normalization); the matcher relies on word keys already being lowercase.
//!
//! Every entry carries a [`TokenKind`] so that one table can hold both the
//! word list and the emoticon list while the matcher still applies a
//! different boundary rule to each.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LexiconError, Result};

/// How a token is located in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Whole-word / whole-phrase match.
    Word,
    /// Raw substring match, no word boundary.
    Emoticon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    score: i32,
    kind: TokenKind,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Entry>,
}

impl Lexicon {
    /// Build from `(token, score)` pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I, kind: TokenKind) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(token, score)| (token.into(), Entry { score, kind }))
            .collect();
        Self { entries }
    }

    /// Parse the tab-separated lexicon format. Any bad line fails the whole load.
    pub fn parse(content: &str, kind: TokenKind) -> Result<Self> {
        let mut entries = HashMap::new();
        for (idx, raw) in content.lines().enumerate() {
            let (token, score) = parse_line(idx + 1, raw)?;
            entries.insert(token.to_string(), Entry { score, kind });
        }
        Ok(Self { entries })
    }

    /// Read and parse a lexicon file.
    pub fn from_file(path: &Path, kind: TokenKind) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lex = Self::parse(&content, kind)?;
        info!(
            target: "lexicon",
            path = %path.display(),
            entries = lex.len(),
            ?kind,
            "lexicon loaded"
        );
        Ok(lex)
    }

    /// Combine two sources into one table; `other` wins on key collisions.
    pub fn merge(mut self, other: Lexicon) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Exact, case-sensitive lookup.
    #[inline]
    pub fn lookup(&self, token: &str) -> Option<i32> {
        self.entries.get(token).map(|e| e.score)
    }

    pub fn kind(&self, token: &str) -> Option<TokenKind> {
        self.entries.get(token).map(|e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All tokens of one kind, in no particular order.
    pub fn tokens(&self, kind: TokenKind) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |(_, e)| e.kind == kind)
            .map(|(t, _)| t.as_str())
    }
}

fn parse_line(line: usize, raw: &str) -> Result<(&str, i32)> {
    let malformed = |reason: String| LexiconError::MalformedEntry { line, reason };

    let fields: Vec<&str> = raw.trim().split('\t').collect();
    if fields.len() != 2 {
        return Err(malformed(format!(
            "expected 2 tab-separated fields, found {}",
            fields.len()
        )));
    }
    let (token, score) = (fields[0], fields[1]);
    if token.is_empty() {
        return Err(malformed("empty token".into()));
    }
    let score = score
        .parse::<i32>()
        .map_err(|e| malformed(format!("score `{score}` is not an integer ({e})")))?;
    Ok((token, score))
}
