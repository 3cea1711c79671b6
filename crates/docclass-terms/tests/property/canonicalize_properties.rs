use std::collections::HashSet;

use docclass_core::ProfileKind;
use docclass_terms::{canonicalize_mesh, Canonicalizer, TermTables};
use proptest::prelude::*;

const DELIMITERS: [char; 4] = ['|', ';', ',', '/'];

fn margin_canonicalizer() -> Canonicalizer {
    TermTables::builtin(ProfileKind::Margin)
        .canonicalizer(&DELIMITERS)
        .unwrap()
}

/// Phrases whose substitutions do not chain into other keys.
fn phrase() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Review",
        "review article",
        "Mini-Review",
        "Systematic Review",
        "scoping review",
        "Meta Analysis",
        "meta-analysis",
        "Journal Article",
        "Letter",
        "Case Report",
        "Randomized Controlled Trial",
        "Humans",
        "Protocol",
        "Narrative Review",
    ])
}

fn delimiter() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["|", "; ", ",", " / ", "||"])
}

fn raw_field() -> impl Strategy<Value = String> {
    prop::collection::vec((phrase(), delimiter()), 1..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(p, d)| format!("{p}{d}"))
            .collect::<String>()
    })
}

// ── Blank input never produces tokens ─────────────────────────────────────

proptest! {
    #[test]
    fn whitespace_and_delimiters_only_is_empty(raw in "[ \t|;,/]{0,20}") {
        let canon = margin_canonicalizer();
        prop_assert!(canon.canonicalize(Some(&raw)).is_empty());
    }
}

// ── Canonicalizing the joined output changes nothing ──────────────────────

proptest! {
    #[test]
    fn canonicalization_is_idempotent(raw in raw_field()) {
        let canon = margin_canonicalizer();
        let first = canon.canonicalize(Some(&raw));
        let joined = first.join("|");
        let second = canon.canonicalize(Some(&joined));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tokens_are_trimmed_unique_and_delimiter_free(raw in raw_field()) {
        let canon = margin_canonicalizer();
        let tokens = canon.canonicalize(Some(&raw));
        let unique: HashSet<&String> = tokens.iter().collect();
        prop_assert_eq!(unique.len(), tokens.len());
        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(&DELIMITERS[..]));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }
}

// ── MeSH normalization is stable on already-singular words ─────────────────

proptest! {
    #[test]
    fn mesh_canonicalization_lowercases_and_trims(word in "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,2}") {
        let out = canonicalize_mesh(&format!("  {word}  "));
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert_eq!(out.to_lowercase(), out.clone());
    }
}

#[test]
fn empty_synonym_table_only_splits() {
    let canon = Canonicalizer::new(&[], &DELIMITERS).unwrap();
    assert_eq!(
        canon.canonicalize(Some("Review Article|Letter")),
        vec!["review article", "letter"]
    );
}
