//! MeSH probability refiner for records with exactly one review vote.

use std::collections::HashSet;

use docclass_core::config::VoteConfig;
use docclass_core::{MeshRefinement, MeshTermProbability, RefineHint};

use crate::table::MeshProbabilityTable;

/// Numeric parameters of the refiner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineParams {
    /// Minimum `|delta|` for a decisive hint.
    pub delta: f64,
    /// Matched terms needed before an undecided record counts as ambiguous
    /// rather than under-evidenced.
    pub k_min: usize,
    /// Added to the review score when PubMed cast the only vote.
    pub prefer_pubmed_epsilon: f64,
    pub top_terms: usize,
}

impl From<&VoteConfig> for RefineParams {
    fn from(config: &VoteConfig) -> Self {
        Self {
            delta: config.delta,
            k_min: config.k_min,
            prefer_pubmed_epsilon: config.prefer_pubmed_epsilon,
            top_terms: config.top_terms,
        }
    }
}

impl Default for RefineParams {
    fn default() -> Self {
        Self::from(&VoteConfig::default())
    }
}

/// Score `terms` (already MeSH-canonical) against `table`.
///
/// Terms missing from the table are ignored; duplicates count once.
pub fn refine(
    terms: &[String],
    table: &MeshProbabilityTable,
    params: &RefineParams,
    pubmed_sole_vote: bool,
) -> MeshRefinement {
    let mut seen = HashSet::new();
    let matched: Vec<MeshTermProbability> = terms
        .iter()
        .filter(|term| seen.insert(term.as_str()))
        .filter_map(|term| {
            table.get(term).map(|p| MeshTermProbability {
                term: term.clone(),
                p,
            })
        })
        .collect();

    let score_experimental: f64 = matched.iter().map(|t| t.p).sum();
    let mut score_review: f64 = matched.iter().map(|t| 1.0 - t.p).sum();
    if pubmed_sole_vote {
        score_review += params.prefer_pubmed_epsilon;
    }
    let delta = score_experimental - score_review;
    let k_terms = matched.len();

    let hint = if k_terms == 0 {
        RefineHint::NoSignal
    } else if delta >= params.delta {
        RefineHint::Experimental
    } else if -delta >= params.delta {
        RefineHint::Review
    } else if k_terms >= params.k_min {
        RefineHint::MeshAmbiguous
    } else {
        RefineHint::LowTerms
    };

    let terms_used = matched.iter().map(|t| t.term.clone()).collect();
    let top_terms = top_terms(matched, params.top_terms);

    MeshRefinement {
        score_review,
        score_experimental,
        delta,
        k_terms,
        terms_used,
        top_terms,
        hint,
    }
}

/// Most discriminative terms first; equal distances fall back to term order.
fn top_terms(mut matched: Vec<MeshTermProbability>, limit: usize) -> Vec<MeshTermProbability> {
    matched.sort_by(|a, b| {
        b.discrimination()
            .total_cmp(&a.discrimination())
            .then_with(|| a.term.cmp(&b.term))
    });
    matched.truncate(limit);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MeshProbabilityTable {
        MeshProbabilityTable::from_pairs([
            ("rat", 0.9),
            ("mouse", 0.95),
            ("cell", 0.9),
            ("human", 0.4),
            ("systematic reviews as topic", 0.05),
        ])
        .unwrap()
    }

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unmatched_terms_give_no_signal() {
        let r = refine(&terms(&["zebrafish"]), &table(), &RefineParams::default(), false);
        assert_eq!(r.k_terms, 0);
        assert_eq!(r.hint, RefineHint::NoSignal);
        assert_eq!(r.delta, 0.0);
    }

    #[test]
    fn duplicates_count_once() {
        let r = refine(&terms(&["rat", "rat"]), &table(), &RefineParams::default(), false);
        assert_eq!(r.k_terms, 1);
        assert_eq!(r.terms_used, vec!["rat"]);
    }

    #[test]
    fn epsilon_only_applies_to_sole_pubmed_vote() {
        let params = RefineParams {
            prefer_pubmed_epsilon: 0.3,
            ..RefineParams::default()
        };
        let with = refine(&terms(&["human"]), &table(), &params, true);
        let without = refine(&terms(&["human"]), &table(), &params, false);
        assert!((with.score_review - without.score_review - 0.3).abs() < 1e-12);
    }

    #[test]
    fn close_scores_are_ambiguous_or_low_terms() {
        let params = RefineParams {
            delta: 0.5,
            k_min: 2,
            ..RefineParams::default()
        };
        // 0.4 vs 0.6
        let low = refine(&terms(&["human"]), &table(), &params, false);
        assert_eq!(low.hint, RefineHint::LowTerms);

        // rat 0.9 + review topic 0.05 → exp 0.95, review 1.05
        let ambiguous = refine(
            &terms(&["rat", "systematic reviews as topic"]),
            &table(),
            &params,
            false,
        );
        assert_eq!(ambiguous.hint, RefineHint::MeshAmbiguous);
    }

    #[test]
    fn strongly_review_terms_hint_review() {
        let r = refine(
            &terms(&["systematic reviews as topic"]),
            &table(),
            &RefineParams::default(),
            false,
        );
        assert_eq!(r.hint, RefineHint::Review);
    }

    #[test]
    fn top_terms_ordered_by_distance_then_name() {
        let params = RefineParams {
            top_terms: 3,
            ..RefineParams::default()
        };
        let r = refine(
            &terms(&["human", "rat", "cell", "mouse"]),
            &table(),
            &params,
            false,
        );
        let names: Vec<&str> = r.top_terms.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(names, vec!["mouse", "cell", "rat"]);
    }
}
