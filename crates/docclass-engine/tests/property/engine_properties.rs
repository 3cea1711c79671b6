use docclass_core::{DocclassConfig, Field, Label, ProfileKind, RawFieldSet, ReasonCode, Source};
use docclass_engine::ClassificationEngine;
use docclass_terms::TermTables;
use proptest::prelude::*;

fn margin_engine() -> ClassificationEngine {
    ClassificationEngine::new(
        &DocclassConfig::default(),
        TermTables::builtin(ProfileKind::Margin),
        None,
    )
    .unwrap()
}

fn class_vote_engine() -> ClassificationEngine {
    let mut config = DocclassConfig::default();
    config.engine.profile = ProfileKind::ClassVote;
    ClassificationEngine::new(&config, TermTables::builtin(ProfileKind::ClassVote), None).unwrap()
}

fn source() -> impl Strategy<Value = Source> {
    prop::sample::select(Source::ALL.to_vec())
}

fn field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

/// Mix of recognized and unrecognized terms across all three fields.
fn term() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Review",
        "Systematic Review",
        "Letter",
        "Case Report",
        "Journal Article",
        "Animals",
        "Humans",
        "Rats",
        "methods",
        "chemistry",
        "drug effects",
        "English Abstract",
        "Evidence-Based Practice",
    ])
}

fn raw_fields() -> impl Strategy<Value = RawFieldSet> {
    prop::collection::vec((source(), field(), prop::collection::vec(term(), 1..4)), 0..8)
        .prop_map(|entries| {
            let mut fields = RawFieldSet::new();
            for (source, field, terms) in entries {
                fields.insert(source, field, terms.join("|"));
            }
            fields
        })
}

/// Terms no dictionary knows, even after synonym substitution.
fn noise() -> impl Strategy<Value = String> {
    "[a-z]{3,10}( [a-z]{3,10})?".prop_filter("must not be a known term", |s| {
        let tables = TermTables::builtin(ProfileKind::Margin);
        let Ok(canon) = tables.canonicalizer(&['|']) else {
            return false;
        };
        canon.canonicalize(Some(s)).iter().all(|token| {
            token != "protocol"
                && Field::ALL
                    .iter()
                    .all(|f| tables.dictionary.lookup(*f, token).is_none())
        })
    })
}

// ── Records without recognized terms are unknown / no_signal ───────────────

proptest! {
    #[test]
    fn unrecognized_terms_give_no_signal(
        entries in prop::collection::vec((source(), field(), noise()), 0..6)
    ) {
        let mut fields = RawFieldSet::new();
        for (source, field, value) in entries {
            fields.insert(source, field, value);
        }
        let decision = margin_engine().classify(&fields);
        prop_assert_eq!(decision.label, Label::Unknown);
        prop_assert_eq!(decision.reason, ReasonCode::NoSignal);
        prop_assert!(decision.evidence.is_empty());
    }
}

// ── Adding a review signal never lowers the margin ─────────────────────────

proptest! {
    #[test]
    fn adding_review_publication_type_is_monotone(fields in raw_fields(), src in source()) {
        let engine = margin_engine();
        let before = engine.classify(&fields);

        let mut extended = fields.clone();
        let existing = fields.get(src, Field::PublicationType).unwrap_or("").to_string();
        extended.insert(src, Field::PublicationType, format!("{existing}|Review"));
        let after = engine.classify(&extended);

        prop_assert!(after.margin >= before.margin - 1e-9);
        if before.label == Label::Review {
            prop_assert_eq!(after.label, Label::Review);
        }
    }

    #[test]
    fn margin_is_review_minus_non_review(fields in raw_fields()) {
        let decision = margin_engine().classify(&fields);
        prop_assert!(decision.scores.review >= 0.0);
        prop_assert!(decision.scores.non_review >= 0.0);
        prop_assert_eq!(decision.margin, decision.scores.review - decision.scores.non_review);
        prop_assert!(decision.evidence.len() <= 10);
    }

    #[test]
    fn classification_is_deterministic(fields in raw_fields()) {
        let engine = class_vote_engine();
        prop_assert_eq!(engine.classify(&fields), engine.classify(&fields));
    }

    #[test]
    fn class_vote_never_emits_non_review(fields in raw_fields()) {
        let decision = class_vote_engine().classify(&fields);
        prop_assert_ne!(decision.label, Label::NonReview);
    }
}
