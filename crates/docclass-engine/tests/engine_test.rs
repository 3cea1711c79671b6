use std::sync::Arc;

use docclass_core::{
    DocclassConfig, Field, Label, ProfileKind, RawFieldSet, ReasonCode, Record, Source,
};
use docclass_engine::{classify_batch, ClassificationEngine, ClassifiedRecord};
use docclass_mesh::MeshProbabilityTable;
use docclass_terms::TermTables;

fn margin_engine() -> ClassificationEngine {
    ClassificationEngine::new(
        &DocclassConfig::default(),
        TermTables::builtin(ProfileKind::Margin),
        None,
    )
    .unwrap()
}

fn vote_engine(unknown_mode: bool) -> ClassificationEngine {
    let mut config = DocclassConfig::default();
    config.engine.profile = ProfileKind::Vote;
    config.vote.unknown_mode = unknown_mode;
    let mesh = MeshProbabilityTable::from_pairs([("rat", 0.9), ("mice", 0.95), ("cell", 0.9)])
        .unwrap();
    ClassificationEngine::new(
        &config,
        TermTables::builtin(ProfileKind::Vote),
        Some(Arc::new(mesh)),
    )
    .unwrap()
}

#[test]
fn empty_record_is_unknown_no_signal() {
    let decision = margin_engine().classify(&RawFieldSet::new());
    assert_eq!(decision.label, Label::Unknown);
    assert_eq!(decision.reason, ReasonCode::NoSignal);
    assert!(decision.scores.is_empty());
    assert!(decision.evidence.is_empty());
}

#[test]
fn null_like_strings_are_absent() {
    let fields = RawFieldSet::new()
        .with(Source::PubMed, Field::PublicationType, "nan")
        .with(Source::OpenAlex, Field::PublicationType, "None")
        .with(Source::Scholar, Field::PublicationType, "NULL");
    let decision = margin_engine().classify(&fields);
    assert_eq!(decision.reason, ReasonCode::NoSignal);
}

#[test]
fn evidence_is_bounded_by_config() {
    let mut config = DocclassConfig::default();
    config.engine.evidence_limit = 2;
    let engine =
        ClassificationEngine::new(&config, TermTables::builtin(ProfileKind::Margin), None).unwrap();
    let fields = RawFieldSet::new()
        .with(Source::PubMed, Field::MeshDescriptor, "Animals|Rats|Mice|Humans")
        .with(Source::PubMed, Field::PublicationType, "Letter");
    let decision = engine.classify(&fields);
    assert_eq!(decision.evidence.len(), 2);
    assert_eq!(decision.evidence[0].token, "letter");
    // Four descriptors tie at 2.4; source and field tie too, so token order decides.
    assert_eq!(decision.evidence[1].token, "animals");
}

#[test]
fn vote_engine_two_of_three_lists_voting_sources() {
    let fields = RawFieldSet::new()
        .with(Source::PubMed, Field::PublicationType, "Systematic Review")
        .with(Source::Scholar, Field::PublicationType, "Literature Review");
    let decision = vote_engine(false).classify(&fields);
    assert_eq!(decision.label, Label::Review);
    assert_eq!(decision.reason, ReasonCode::MajorityVote);
    let sources: Vec<Source> = decision.evidence.iter().map(|e| e.source).collect();
    assert_eq!(sources, vec![Source::PubMed, Source::Scholar]);
    let tally = decision.votes.unwrap();
    assert!(tally.pubmed && tally.scholar && !tally.openalex);
}

#[test]
fn vote_engine_refines_single_vote() {
    let fields = RawFieldSet::new()
        .with(Source::OpenAlex, Field::PublicationType, "review")
        .with(Source::PubMed, Field::MeshDescriptor, "Rats|Mice|Cells");
    let decision = vote_engine(false).classify(&fields);
    assert_eq!(decision.label, Label::NonReview);
    assert_eq!(decision.reason, ReasonCode::MeshRefinement);
    let refinement = decision.refinement.unwrap();
    assert!((refinement.delta - 2.5).abs() < 1e-9);
    assert_eq!(refinement.terms_used, vec!["rat", "mice", "cell"]);
}

#[test]
fn batch_preserves_input_order() {
    let engine = margin_engine();
    let records: Vec<Record> = (0..200)
        .map(|i| {
            let pt = if i % 2 == 0 { "Review" } else { "Case Report" };
            Record::new(
                format!("rec-{i:03}"),
                RawFieldSet::new().with(Source::PubMed, Field::PublicationType, pt),
            )
        })
        .collect();

    let results = classify_batch(&engine, &records);
    assert_eq!(results.len(), records.len());
    for (i, (result, record)) in results.iter().zip(&records).enumerate() {
        assert_eq!(result.record_id, record.id);
        let expected = if i % 2 == 0 {
            Label::Review
        } else {
            Label::NonReview
        };
        assert_eq!(result.decision.label, expected);
    }
}

#[test]
fn classified_record_json_is_flat() {
    let engine = margin_engine();
    let record = Record::new(
        "10.1000/xyz",
        RawFieldSet::new().with(Source::PubMed, Field::PublicationType, "Review"),
    );
    let results = classify_batch(&engine, std::slice::from_ref(&record));
    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(json["record_id"], "10.1000/xyz");
    assert_eq!(json["label"], "review");
    assert_eq!(json["reason"], "score_threshold");
    assert_eq!(json["evidence"][0]["source"], "pubmed");

    let back: ClassifiedRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, results[0]);
}

#[test]
fn term_override_changes_outcome() {
    let toml = r#"
[terms.publication_type]
review = ["review", "systematic review", "meta-analysis", "editorial"]
"#;
    let tables = TermTables::from_toml(ProfileKind::Margin, toml).unwrap();
    let engine = ClassificationEngine::new(&DocclassConfig::default(), tables, None).unwrap();
    let decision = engine.classify(
        &RawFieldSet::new().with(Source::PubMed, Field::PublicationType, "Editorial"),
    );
    assert_eq!(decision.label, Label::Review);
}
