use std::fmt;

use serde::{Deserialize, Serialize};

/// Final class assigned to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    Review,
    NonReview,
    Experimental,
    Unknown,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::NonReview => "non-review",
            Self::Experimental => "experimental",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// No signal fired at all.
    NoSignal,
    /// The margin cleared the threshold.
    ScoreThreshold,
    /// Evidence present but not decisive.
    BelowThreshold,
    ProtocolOverride,
    MetaAnalysisOverride,
    GuidelineOverride,
    /// Two or more sources voted review.
    MajorityVote,
    /// No source voted review.
    NoVotes,
    /// The MeSH delta cleared the refinement threshold.
    MeshRefinement,
    MeshAmbiguous,
    LowTerms,
    NoMeshSignal,
    /// One class strictly dominated the three-way vote.
    ClassVote,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoSignal => "no_signal",
            Self::ScoreThreshold => "score_threshold",
            Self::BelowThreshold => "below_threshold",
            Self::ProtocolOverride => "protocol_override",
            Self::MetaAnalysisOverride => "meta_analysis_override",
            Self::GuidelineOverride => "guideline_override",
            Self::MajorityVote => "majority_vote",
            Self::NoVotes => "no_votes",
            Self::MeshRefinement => "mesh_refinement",
            Self::MeshAmbiguous => "mesh_ambiguous",
            Self::LowTerms => "low_terms",
            Self::NoMeshSignal => "no_mesh_signal",
            Self::ClassVote => "class_vote",
        }
    }

    /// Overrides bypass the profile's normal scoring rule.
    pub fn is_override(self) -> bool {
        matches!(
            self,
            Self::ProtocolOverride | Self::MetaAnalysisOverride | Self::GuidelineOverride
        )
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
