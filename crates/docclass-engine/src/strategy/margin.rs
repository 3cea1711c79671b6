//! Weighted signals against a symmetric margin threshold.

use docclass_core::config::MarginConfig;
use docclass_core::constants::PROTOCOL_TOKEN;
use docclass_core::{Decision, Field, Label, ReasonCode, Source};
use docclass_terms::TermTables;

use crate::evidence::select_evidence;
use crate::extract::{extract_all, CanonicalFields};
use crate::scorer::score;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginStrategy {
    pub threshold: f64,
}

impl From<&MarginConfig> for MarginStrategy {
    fn from(config: &MarginConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }
}

impl MarginStrategy {
    pub fn decide(&self, fields: &CanonicalFields, tables: &TermTables, evidence_limit: usize) -> Decision {
        let signals = extract_all(fields, tables);
        let scores = score(&signals);
        let evidence = select_evidence(&signals, evidence_limit);

        // Protocol on any source forces unknown, whatever the scores.
        let (label, reason) =
            if fields.contains(&Source::ALL, Field::PublicationType, PROTOCOL_TOKEN) {
                (Label::Unknown, ReasonCode::ProtocolOverride)
            } else if scores.is_empty() {
                (Label::Unknown, ReasonCode::NoSignal)
            } else {
                let margin = scores.margin();
                if margin >= self.threshold {
                    (Label::Review, ReasonCode::ScoreThreshold)
                } else if -margin >= self.threshold {
                    (Label::NonReview, ReasonCode::ScoreThreshold)
                } else {
                    (Label::Unknown, ReasonCode::BelowThreshold)
                }
            };

        Decision::new(label, reason, scores).with_evidence(evidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docclass_core::{ProfileKind, RawFieldSet};

    fn decide(raw: RawFieldSet) -> Decision {
        let tables = TermTables::builtin(ProfileKind::Margin);
        let canon = tables.canonicalizer(&['|', ';', ',', '/']).unwrap();
        let fields = CanonicalFields::from_raw(&raw, &canon);
        MarginStrategy { threshold: 1.0 }.decide(&fields, &tables, 10)
    }

    #[test]
    fn narrative_review_from_pubmed_is_review() {
        let d = decide(RawFieldSet::new().with(
            Source::PubMed,
            Field::PublicationType,
            "Narrative Review",
        ));
        assert_eq!(d.label, Label::Review);
        assert_eq!(d.reason, ReasonCode::ScoreThreshold);
        assert_eq!(d.margin, 6.0);
        assert_eq!(d.evidence.len(), 1);
        assert_eq!(d.evidence[0].token, "review");
    }

    #[test]
    fn clinical_trial_with_animal_mesh_is_non_review() {
        let d = decide(
            RawFieldSet::new()
                .with(Source::PubMed, Field::PublicationType, "Clinical Trial")
                .with(Source::PubMed, Field::MeshDescriptor, "Animals|Rats"),
        );
        assert_eq!(d.label, Label::NonReview);
        assert!((d.scores.non_review - 9.3).abs() < 1e-9);
        assert!((d.margin + 9.3).abs() < 1e-9);
    }

    #[test]
    fn protocol_overrides_strong_review_signal() {
        let d = decide(
            RawFieldSet::new()
                .with(Source::Crossref, Field::PublicationType, "Protocol")
                .with(Source::PubMed, Field::PublicationType, "Systematic Review"),
        );
        assert_eq!(d.label, Label::Unknown);
        assert_eq!(d.reason, ReasonCode::ProtocolOverride);
        assert_eq!(d.scores.review, 6.0);
    }

    #[test]
    fn no_recognized_terms_is_no_signal() {
        let d = decide(RawFieldSet::new().with(
            Source::Scholar,
            Field::PublicationType,
            "Journal Article",
        ));
        assert_eq!(d.label, Label::Unknown);
        assert_eq!(d.reason, ReasonCode::NoSignal);
        assert!(d.evidence.is_empty());
    }

    #[test]
    fn weak_margin_is_below_threshold() {
        // methods 1.5 vs chemistry 1.8
        let d = decide(RawFieldSet::new().with(
            Source::PubMed,
            Field::MeshQualifier,
            "methods|chemistry",
        ));
        assert_eq!(d.label, Label::Unknown);
        assert_eq!(d.reason, ReasonCode::BelowThreshold);
    }
}
