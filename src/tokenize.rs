// src/tokenize.rs
//! Fallback scoring: split into word-character runs, look each one up.
//!
//! No phrase or emoticon awareness, so entries like `tv-succes` or `:-)` can
//! never contribute here. Cheaper than the compiled matcher for big lexicons.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

// \w is Unicode-aware by default in the regex crate
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word regex"));

/// Maximal runs of word characters, original case kept.
pub fn split(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Lowercase each split token and sum its valence (0 when absent).
pub fn score_with_wordlist(lexicon: &Lexicon, text: &str) -> f64 {
    WORD.find_iter(text)
        .map(|m| lexicon.lookup(&m.as_str().to_lowercase()).unwrap_or(0))
        .map(f64::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::TokenKind;

    #[test]
    fn split_drops_punctuation() {
        assert_eq!(split("Hello, World"), vec!["Hello", "World"]);
        assert_eq!(split("Hell\u{f8}, \u{c5}rld"), vec!["Hell\u{f8}", "\u{c5}rld"]);
        assert!(split("").is_empty());
        assert!(split(" ,.;!").is_empty());
    }

    #[test]
    fn wordlist_score_is_case_insensitive() {
        let lex = Lexicon::from_pairs([("good", 3), ("bad", -3)], TokenKind::Word);
        assert_eq!(score_with_wordlist(&lex, "Rather good."), 3.0);
        assert_eq!(score_with_wordlist(&lex, "Rather GOOD."), 3.0);
        assert_eq!(score_with_wordlist(&lex, "good bad BAD"), -3.0);
        assert_eq!(score_with_wordlist(&lex, ""), 0.0);
    }

    #[test]
    fn wordlist_cannot_see_phrases() {
        let lex = Lexicon::from_pairs([("tv-succes", 3), ("ikke god", -2)], TokenKind::Word);
        assert_eq!(score_with_wordlist(&lex, "En tv-succes"), 0.0);
        assert_eq!(score_with_wordlist(&lex, "ikke god"), 0.0);
    }
}
