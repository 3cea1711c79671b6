//! Two-of-three publication-type vote with MeSH probability refinement.

use std::sync::Arc;

use docclass_core::config::VoteConfig;
use docclass_core::constants::{GUIDELINE_TOKEN, GUIDELINE_TOPIC_DESCRIPTOR, META_ANALYSIS_TOKEN};
use docclass_core::{
    Decision, EvidenceItem, Field, Label, MeshRefinement, ReasonCode, RefineHint, ScoreVector,
    Source, VoteTally,
};
use docclass_mesh::{refine, MeshProbabilityTable, RefineParams};
use docclass_terms::{canonicalize_mesh, TermTables};

use crate::extract::CanonicalFields;

/// Only PubMed and OpenAlex carry MeSH.
const MESH_SOURCES: [Source; 2] = [Source::PubMed, Source::OpenAlex];

#[derive(Debug, Clone)]
pub struct VoteStrategy {
    pub params: RefineParams,
    pub unknown_mode: bool,
    pub mesh: Arc<MeshProbabilityTable>,
}

impl VoteStrategy {
    pub fn new(config: &VoteConfig, mesh: Arc<MeshProbabilityTable>) -> Self {
        Self {
            params: RefineParams::from(config),
            unknown_mode: config.unknown_mode,
            mesh,
        }
    }

    pub fn decide(&self, fields: &CanonicalFields, tables: &TermTables, evidence_limit: usize) -> Decision {
        if let Some(mut decision) = self.check_overrides(fields, tables) {
            decision.evidence.truncate(evidence_limit);
            return decision;
        }

        let tally = tally(fields, tables);
        let mut evidence = vote_evidence(fields, tables, &tally);
        evidence.truncate(evidence_limit);

        match tally.votes() {
            0 => Decision::new(Label::NonReview, ReasonCode::NoVotes, ScoreVector::default())
                .with_votes(tally),
            1 => {
                let refinement = refine(
                    &mesh_terms(fields),
                    &self.mesh,
                    &self.params,
                    tally.pubmed_sole_vote(),
                );
                self.resolve(refinement, tally, evidence)
            }
            _ => Decision::new(Label::Review, ReasonCode::MajorityVote, ScoreVector::default())
                .with_votes(tally)
                .with_evidence(evidence),
        }
    }

    /// Meta-analysis and guideline rules win before any vote is counted.
    fn check_overrides(&self, fields: &CanonicalFields, tables: &TermTables) -> Option<Decision> {
        let qualifiers = fields.collect(&MESH_SOURCES, Field::MeshQualifier);
        let descriptors = fields.collect(&MESH_SOURCES, Field::MeshDescriptor);

        let meta_analysis = pt_evidence(fields, tables, META_ANALYSIS_TOKEN);
        if !meta_analysis.is_empty()
            && !qualifiers
                .iter()
                .any(|q| tables.experimental_qualifiers.contains(*q))
        {
            return Some(
                Decision::new(
                    Label::Review,
                    ReasonCode::MetaAnalysisOverride,
                    ScoreVector::default(),
                )
                .with_votes(tally(fields, tables))
                .with_evidence(meta_analysis),
            );
        }

        let guideline = pt_evidence(fields, tables, GUIDELINE_TOKEN);
        if !guideline.is_empty()
            && descriptors.contains(&GUIDELINE_TOPIC_DESCRIPTOR)
            && !descriptors
                .iter()
                .any(|d| tables.experimental_descriptors.contains(*d))
        {
            let mut evidence = guideline;
            evidence.extend(
                MESH_SOURCES
                    .iter()
                    .filter(|s| {
                        fields.contains(&[**s], Field::MeshDescriptor, GUIDELINE_TOPIC_DESCRIPTOR)
                    })
                    .map(|s| EvidenceItem {
                        source: *s,
                        field: Field::MeshDescriptor,
                        token: GUIDELINE_TOPIC_DESCRIPTOR.to_string(),
                        points: 0.0,
                    }),
            );
            return Some(
                Decision::new(Label::Review, ReasonCode::GuidelineOverride, ScoreVector::default())
                    .with_votes(tally(fields, tables))
                    .with_evidence(evidence),
            );
        }
        None
    }

    fn resolve(
        &self,
        refinement: MeshRefinement,
        tally: VoteTally,
        evidence: Vec<EvidenceItem>,
    ) -> Decision {
        let undecided = if self.unknown_mode {
            Label::Unknown
        } else {
            Label::NonReview
        };
        let (label, reason) = match refinement.hint {
            RefineHint::Experimental => (Label::NonReview, ReasonCode::MeshRefinement),
            RefineHint::Review => (Label::Review, ReasonCode::MeshRefinement),
            RefineHint::MeshAmbiguous => (undecided, ReasonCode::MeshAmbiguous),
            RefineHint::LowTerms => (undecided, ReasonCode::LowTerms),
            RefineHint::NoSignal => (undecided, ReasonCode::NoMeshSignal),
        };
        // Review and experimental mass, so the margin is `-delta`.
        let scores = ScoreVector {
            review: refinement.score_review,
            non_review: refinement.score_experimental,
            unknown: 0.0,
        };
        Decision::new(label, reason, scores)
            .with_votes(tally)
            .with_refinement(refinement)
            .with_evidence(evidence)
    }
}

/// Review flag per voting source.
pub fn tally(fields: &CanonicalFields, tables: &TermTables) -> VoteTally {
    let votes = |source: Source| {
        fields
            .get(source, Field::PublicationType)
            .iter()
            .any(|t| tables.is_review_alias(t))
    };
    let [pubmed, openalex, scholar] = Source::VOTING.map(votes);
    VoteTally {
        pubmed,
        openalex,
        scholar,
    }
}

/// Descriptors then qualifiers of the MeSH sources, MeSH-canonical, in order.
pub fn mesh_terms(fields: &CanonicalFields) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for source in MESH_SOURCES {
        for field in [Field::MeshDescriptor, Field::MeshQualifier] {
            for token in fields.get(source, field) {
                let term = canonicalize_mesh(token);
                if !term.is_empty() && !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
    }
    terms
}

/// One item per voting source: the first review alias it reported.
fn vote_evidence(fields: &CanonicalFields, tables: &TermTables, tally: &VoteTally) -> Vec<EvidenceItem> {
    tally
        .voting_sources()
        .into_iter()
        .filter_map(|source| {
            let token = fields
                .get(source, Field::PublicationType)
                .iter()
                .find(|t| tables.is_review_alias(t))?;
            Some(pt_item(source, token, tables))
        })
        .collect()
}

/// Items for every source whose publication types contain `token`.
fn pt_evidence(fields: &CanonicalFields, tables: &TermTables, token: &str) -> Vec<EvidenceItem> {
    Source::ALL
        .into_iter()
        .filter(|source| fields.contains(&[*source], Field::PublicationType, token))
        .map(|source| pt_item(source, token, tables))
        .collect()
}

fn pt_item(source: Source, token: &str, tables: &TermTables) -> EvidenceItem {
    EvidenceItem {
        source,
        field: Field::PublicationType,
        token: token.to_string(),
        points: tables.source_weights.get(source)
            * tables
                .field_weights
                .get(Field::PublicationType, docclass_core::SignalKind::Review),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docclass_core::{ProfileKind, RawFieldSet};

    fn strategy(unknown_mode: bool) -> VoteStrategy {
        let table = MeshProbabilityTable::from_pairs([
            ("rat", 0.9),
            ("mice", 0.95),
            ("cell", 0.9),
            ("human", 0.45),
            ("systematic reviews as topic", 0.05),
        ])
        .unwrap();
        let config = VoteConfig {
            unknown_mode,
            ..VoteConfig::default()
        };
        VoteStrategy::new(&config, Arc::new(table))
    }

    fn decide(strategy: &VoteStrategy, raw: RawFieldSet) -> Decision {
        let tables = TermTables::builtin(ProfileKind::Vote);
        let canon = tables.canonicalizer(&['|', ';', ',', '/']).unwrap();
        let fields = CanonicalFields::from_raw(&raw, &canon);
        strategy.decide(&fields, &tables, 10)
    }

    #[test]
    fn two_votes_is_majority_review() {
        let d = decide(
            &strategy(false),
            RawFieldSet::new()
                .with(Source::PubMed, Field::PublicationType, "Review")
                .with(Source::Scholar, Field::PublicationType, "Review")
                .with(Source::OpenAlex, Field::PublicationType, "journal-article"),
        );
        assert_eq!(d.label, Label::Review);
        assert_eq!(d.reason, ReasonCode::MajorityVote);
        assert_eq!(d.vote_count(), Some(2));
        let sources: Vec<Source> = d.evidence.iter().map(|e| e.source).collect();
        assert_eq!(sources, vec![Source::PubMed, Source::Scholar]);
    }

    #[test]
    fn no_votes_is_non_review() {
        let d = decide(
            &strategy(true),
            RawFieldSet::new().with(Source::PubMed, Field::PublicationType, "Clinical Trial"),
        );
        assert_eq!(d.label, Label::NonReview);
        assert_eq!(d.reason, ReasonCode::NoVotes);
        assert_eq!(d.vote_count(), Some(0));
        assert!(d.refinement.is_none());
    }

    #[test]
    fn single_vote_with_experimental_mesh_is_non_review() {
        let d = decide(
            &strategy(false),
            RawFieldSet::new()
                .with(Source::OpenAlex, Field::PublicationType, "review")
                .with(Source::PubMed, Field::MeshDescriptor, "Rats|Mice|Cells"),
        );
        assert_eq!(d.label, Label::NonReview);
        assert_eq!(d.reason, ReasonCode::MeshRefinement);
        let refinement = d.refinement.as_ref().unwrap();
        assert_eq!(refinement.k_terms, 3);
        assert!(refinement.delta >= 0.5);
        assert!((d.margin + refinement.delta).abs() < 1e-9);
    }

    #[test]
    fn single_vote_without_mesh_depends_on_unknown_mode() {
        let raw = RawFieldSet::new().with(Source::Scholar, Field::PublicationType, "Review");
        let strict = decide(&strategy(false), raw.clone());
        assert_eq!(strict.label, Label::NonReview);
        assert_eq!(strict.reason, ReasonCode::NoMeshSignal);

        let lenient = decide(&strategy(true), raw);
        assert_eq!(lenient.label, Label::Unknown);
        assert_eq!(lenient.reason, ReasonCode::NoMeshSignal);
    }

    #[test]
    fn ambiguous_mesh_in_unknown_mode_is_unknown() {
        let d = decide(
            &strategy(true),
            RawFieldSet::new()
                .with(Source::PubMed, Field::PublicationType, "Review")
                .with(Source::PubMed, Field::MeshDescriptor, "Humans"),
        );
        assert_eq!(d.label, Label::Unknown);
        assert_eq!(d.reason, ReasonCode::LowTerms);
    }

    #[test]
    fn meta_analysis_without_experimental_qualifier_overrides() {
        let d = decide(
            &strategy(false),
            RawFieldSet::new()
                .with(Source::Crossref, Field::PublicationType, "Meta Analysis")
                .with(Source::PubMed, Field::MeshQualifier, "statistics & numerical data"),
        );
        assert_eq!(d.label, Label::Review);
        assert_eq!(d.reason, ReasonCode::MetaAnalysisOverride);
        assert_eq!(d.evidence[0].source, Source::Crossref);
    }

    #[test]
    fn meta_analysis_with_experimental_qualifier_goes_to_vote() {
        let d = decide(
            &strategy(false),
            RawFieldSet::new()
                .with(Source::PubMed, Field::PublicationType, "Meta-Analysis")
                .with(Source::PubMed, Field::MeshQualifier, "drug therapy"),
        );
        assert_ne!(d.reason, ReasonCode::MetaAnalysisOverride);
        assert_eq!(d.vote_count(), Some(1));
    }

    #[test]
    fn guideline_with_topic_descriptor_overrides() {
        let raw = RawFieldSet::new()
            .with(Source::PubMed, Field::PublicationType, "Guideline")
            .with(
                Source::PubMed,
                Field::MeshDescriptor,
                "Practice Guidelines as Topic|Humans",
            );
        let d = decide(&strategy(false), raw);
        assert_eq!(d.label, Label::Review);
        assert_eq!(d.reason, ReasonCode::GuidelineOverride);
        assert_eq!(d.evidence.len(), 2);

        let blocked = decide(
            &strategy(false),
            RawFieldSet::new()
                .with(Source::PubMed, Field::PublicationType, "Guideline")
                .with(
                    Source::PubMed,
                    Field::MeshDescriptor,
                    "Practice Guidelines as Topic|Animals",
                ),
        );
        assert_eq!(blocked.reason, ReasonCode::NoVotes);
    }

    #[test]
    fn mesh_terms_merge_descriptors_and_qualifiers() {
        let tables = TermTables::builtin(ProfileKind::Vote);
        let canon = tables.canonicalizer(&['|']).unwrap();
        let raw = RawFieldSet::new()
            .with(Source::PubMed, Field::MeshDescriptor, "Rats|Humans")
            .with(Source::PubMed, Field::MeshQualifier, "Methods")
            .with(Source::OpenAlex, Field::MeshDescriptor, "rat|Mice")
            .with(Source::Scholar, Field::MeshDescriptor, "Zebrafish");
        let fields = CanonicalFields::from_raw(&raw, &canon);
        assert_eq!(
            mesh_terms(&fields),
            vec!["rat", "human", "method", "mice"]
        );
    }
}
