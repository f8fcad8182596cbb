// src/matcher.rs
//! Phrase-aware matcher: one compiled alternation over every lexicon key.
//!
//! Layout of the compiled pattern:
//!
//! ```text
//! (?P<word>\b(?:longest|…|shortest)\b)|(?P<emoticon>(?:longest|…|shortest))
//! ```
//!
//! The `regex` crate commits to the first alternative that matches at a
//! position (leftmost-first), so both lists are sorted by descending length
//! before joining: `tv-succes` must be tried before `tv`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LexiconError, Result};
use crate::lexicon::{Lexicon, TokenKind};

const WORD_GROUP: &str = "word";
const EMOTICON_GROUP: &str = "emoticon";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Case handling for the emoticon part of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmoticonCase {
    /// Lowercase the whole text before matching. Uppercase emoticons such as
    /// `:D` can then never match.
    #[default]
    Lowercase,
    /// Match words case-insensitively on the original text and emoticons
    /// case-sensitively.
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub include_emoticons: bool,
    pub word_boundary: bool,
    pub emoticon_case: EmoticonCase,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            include_emoticons: false,
            word_boundary: true,
            emoticon_case: EmoticonCase::Lowercase,
        }
    }
}

#[derive(Debug)]
pub struct Matcher {
    lexicon: Lexicon,
    pattern: Regex,
    emoticon_case: EmoticonCase,
}

impl Matcher {
    /// Compile the alternation for `lexicon`. Fails with `EmptyLexicon` when
    /// no token is eligible.
    pub fn compile(lexicon: Lexicon, opts: &MatchOptions) -> Result<Self> {
        let words = longest_first(lexicon.tokens(TokenKind::Word));
        let emoticons = if opts.include_emoticons {
            longest_first(lexicon.tokens(TokenKind::Emoticon))
        } else {
            Vec::new()
        };

        let mut branches = Vec::with_capacity(2);
        if !words.is_empty() {
            let alt = alternation(&words);
            let bounded = if opts.word_boundary {
                format!(r"\b{alt}\b")
            } else {
                alt
            };
            let body = match opts.emoticon_case {
                EmoticonCase::Lowercase => bounded,
                EmoticonCase::Preserve => format!("(?i:{bounded})"),
            };
            branches.push(format!("(?P<{WORD_GROUP}>{body})"));
        }
        if !emoticons.is_empty() {
            branches.push(format!(
                "(?P<{EMOTICON_GROUP}>{})",
                alternation(&emoticons)
            ));
        }
        if branches.is_empty() {
            return Err(LexiconError::EmptyLexicon);
        }

        let pattern = Regex::new(&branches.join("|"))?;
        debug!(
            target: "matcher",
            words = words.len(),
            emoticons = emoticons.len(),
            word_boundary = opts.word_boundary,
            "pattern compiled"
        );

        Ok(Self {
            lexicon,
            pattern,
            emoticon_case: opts.emoticon_case,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// All lexicon tokens found in `text`, left to right, non-overlapping.
    pub fn find_all(&self, text: &str, normalize_whitespace: bool) -> Vec<String> {
        let text: Cow<'_, str> = if normalize_whitespace {
            WHITESPACE.replace_all(text, " ")
        } else {
            Cow::Borrowed(text)
        };

        match self.emoticon_case {
            EmoticonCase::Lowercase => self.collect(&text.to_lowercase(), false),
            EmoticonCase::Preserve => self.collect(&text, true),
        }
    }

    fn collect(&self, haystack: &str, fold_words: bool) -> Vec<String> {
        self.pattern
            .captures_iter(haystack)
            .filter_map(|caps| {
                if let Some(m) = caps.name(WORD_GROUP) {
                    Some(if fold_words {
                        m.as_str().to_lowercase()
                    } else {
                        m.as_str().to_string()
                    })
                } else {
                    caps.name(EMOTICON_GROUP).map(|m| m.as_str().to_string())
                }
            })
            .collect()
    }
}

/// Empty keys are dropped: an empty alternative matches at every boundary.
fn longest_first<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = tokens.filter(|t| !t.is_empty()).collect();
    v.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    v
}

fn alternation(tokens: &[&str]) -> String {
    let escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
    format!("(?:{})", escaped.join("|"))
}
