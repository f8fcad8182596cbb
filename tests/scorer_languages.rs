// tests/scorer_languages.rs
// Behaviour of the bundled English/Danish/emoticon lexicons through the public Scorer.

use afinn_scorer::{EmoticonCase, LexiconError, LexiconRegistry, Scorer, ScorerOptions, Strategy};

fn registry() -> LexiconRegistry {
    LexiconRegistry::default_seed(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn scorer(opts: ScorerOptions) -> Scorer {
    Scorer::new(&registry(), opts).expect("build scorer from bundled data")
}

fn en() -> Scorer {
    scorer(ScorerOptions::default())
}

fn da() -> Scorer {
    scorer(ScorerOptions::default().language("da"))
}

#[test]
fn find_all_returns_only_lexicon_tokens() {
    assert_eq!(en().find_all("It is so bad"), vec!["bad"]);
    assert!(en().find_all("").is_empty());
}

#[test]
fn split_keeps_case_and_drops_punctuation() {
    let s = en();
    assert_eq!(s.split("Hello, World"), vec!["Hello", "World"]);
    assert_eq!(
        s.split("Hell\u{f8}, \u{c5}rld"),
        vec!["Hell\u{f8}", "\u{c5}rld"]
    );
}

#[test]
fn english_scores() {
    let s = en();
    assert!(s.score("bad") < 0.0);
    assert!(s.score("This is oh so bad.") < 0.0);
    assert_eq!(s.score(""), 0.0);
    assert_eq!(s.score("the cat sat on the mat"), 0.0);
}

#[test]
fn plain_words_are_case_insensitive() {
    let s = en();
    let lower = s.score("bad");
    assert!(lower < 0.0);
    assert_eq!(s.score("BAD"), lower);
    assert_eq!(s.score("Bad"), lower);
}

#[test]
fn language_codes_resolve_case_insensitively() {
    assert!(scorer(ScorerOptions::default().language("EN")).score("bad") < 0.0);
}

#[test]
fn unicode_tokens_match() {
    assert!(en().score("na\u{ef}ve") < 0.0);
    let d = da();
    assert!(d.score("bedrageri") < 0.0);
    assert!(d.score("besv\u{e6}r") < 0.0);
}

#[test]
fn danish_phrases_and_boundaries() {
    let d = da();
    assert!(d.score("Det er bare vidunderlig!!!") > 0.0);
    assert!(d.score("ikke god") < 0.0);
    assert!(d.score("ikke god.") < 0.0);
    assert!(d.score("IKKE GOD-") < 0.0);
    assert!(d.score("ikke   god") < 0.0);
    assert_eq!(d.score("ikke   god"), d.score("ikke god"));
    assert!(d.score("En tv-succes sidste gang.") > 0.0);
    assert_eq!(d.find_all("En tv-succes sidste gang."), vec!["tv-succes"]);
    assert_eq!(d.score(""), 0.0);
}

#[test]
fn wordlist_strategy() {
    let s = scorer(ScorerOptions::default().with_strategy(Strategy::Wordlist));
    assert!(s.score("Rather good.") > 0.0);
    assert!(s.score("Rather GOOD.") > 0.0);
    assert_eq!(s.score(""), 0.0);

    // No phrase awareness: "ikke god" is just "god" here.
    let d = scorer(
        ScorerOptions::default()
            .language("da")
            .with_strategy(Strategy::Wordlist),
    );
    assert!(d.score("ikke god") > 0.0);
    assert!(d.score_by_pattern("ikke god") < 0.0);
}

#[test]
fn emoticons_combine_with_words() {
    let s = scorer(ScorerOptions::default().with_emoticons(true));
    assert_eq!(s.find_all("This is a :-) smiley"), vec![":-)"]);
    assert!(s.score("This is a :-) smiley") > 0.0);
    assert_eq!(s.scores("BAD BAD BAD :-)"), vec![-3, -3, -3, 2]);
    assert!(s.score("BAD BAD BAD :-)") < 0.0);
}

#[test]
fn emoticons_are_ignored_unless_enabled() {
    let s = en();
    assert!(s.find_all("This is a :-) smiley").is_empty());
    assert_eq!(s.score(":-) :-)"), 0.0);
}

#[test]
fn uppercase_emoticons_need_preserve_mode() {
    let lowered = scorer(ScorerOptions::default().with_emoticons(true));
    assert!(lowered.find_all("great :D").iter().all(|t| t != ":D"));

    let preserved = scorer(
        ScorerOptions::default()
            .with_emoticons(true)
            .with_emoticon_case(EmoticonCase::Preserve),
    );
    assert_eq!(preserved.find_all("GREAT :D"), vec!["great", ":D"]);
    assert_eq!(preserved.score("GREAT :D"), 6.0);
}

#[test]
fn word_boundary_can_be_turned_off() {
    let bounded = en();
    assert_eq!(bounded.score("badly"), 0.0);

    let loose = scorer(ScorerOptions::default().with_word_boundary(false));
    assert!(loose.score("badly") < 0.0);
}

#[test]
fn unknown_language_is_rejected() {
    let err = Scorer::new(&registry(), ScorerOptions::default().language("tr")).unwrap_err();
    assert!(matches!(err, LexiconError::UnknownLanguage(ref c) if c == "tr"));
}
