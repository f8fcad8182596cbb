// src/error.rs
//! Typed failures for lexicon loading and pattern compilation.
//!
//! Scoring itself never fails; every variant here is raised while building a
//! `Lexicon`, a `Matcher` or a `Scorer`.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The requested language code has no configured word file.
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    /// A line is not `<token><TAB><integer>`.
    #[error("malformed lexicon entry at line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    /// Nothing to build an alternation from.
    #[error("lexicon has no tokens to match")]
    EmptyLexicon,

    #[error("reading lexicon {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("compiling lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = LexiconError::MalformedEntry {
            line: 7,
            reason: "expected 2 tab-separated fields, found 3".into(),
        };
        assert_eq!(
            e.to_string(),
            "malformed lexicon entry at line 7: expected 2 tab-separated fields, found 3"
        );
        assert_eq!(
            LexiconError::UnknownLanguage("xx".into()).to_string(),
            "unknown language `xx`"
        );
    }
}
