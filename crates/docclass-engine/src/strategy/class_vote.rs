//! Three-way weighted class vote: review, experimental or unknown.

use docclass_core::config::ClassVoteConfig;
use docclass_core::{Decision, Label, ReasonCode, ScoreVector};
use docclass_terms::TermTables;

use crate::evidence::select_evidence;
use crate::extract::{extract_all, CanonicalFields};
use crate::scorer::score;

/// Minimum totals a strictly dominant class needs to win.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassVoteStrategy {
    pub min_review_score: f64,
    pub min_unknown_score: f64,
    pub min_experimental_score: f64,
}

impl From<&ClassVoteConfig> for ClassVoteStrategy {
    fn from(config: &ClassVoteConfig) -> Self {
        Self {
            min_review_score: config.min_review_score,
            min_unknown_score: config.min_unknown_score,
            min_experimental_score: config.min_experimental_score,
        }
    }
}

impl ClassVoteStrategy {
    pub fn decide(&self, fields: &CanonicalFields, tables: &TermTables, evidence_limit: usize) -> Decision {
        let signals = extract_all(fields, tables);
        let scores = score(&signals);
        let (label, reason) = self.label(&scores);
        Decision::new(label, reason, scores).with_evidence(select_evidence(&signals, evidence_limit))
    }

    /// `non_review` carries the experimental total.
    fn label(&self, scores: &ScoreVector) -> (Label, ReasonCode) {
        if scores.is_empty() {
            return (Label::Unknown, ReasonCode::NoSignal);
        }
        let (r, e, u) = (scores.review, scores.non_review, scores.unknown);
        if r > e.max(u) && r >= self.min_review_score {
            (Label::Review, ReasonCode::ClassVote)
        } else if u > r.max(e) && u >= self.min_unknown_score {
            (Label::Unknown, ReasonCode::ClassVote)
        } else if e > r.max(u) && e >= self.min_experimental_score {
            (Label::Experimental, ReasonCode::ClassVote)
        } else {
            (Label::Unknown, ReasonCode::BelowThreshold)
        }
    }
}
