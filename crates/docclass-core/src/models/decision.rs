use serde::{Deserialize, Serialize};

use super::{Field, Label, ReasonCode, ScoreVector, Signal, Source};

/// Audit entry describing one contributing piece of evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub source: Source,
    pub field: Field,
    pub token: String,
    pub points: f64,
}

impl From<&Signal> for EvidenceItem {
    fn from(signal: &Signal) -> Self {
        Self {
            source: signal.source,
            field: signal.field,
            token: signal.token.clone(),
            points: signal.points,
        }
    }
}

/// Per-source review flags for the vote profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub pubmed: bool,
    pub openalex: bool,
    pub scholar: bool,
}

impl VoteTally {
    pub fn votes(&self) -> u8 {
        u8::from(self.pubmed) + u8::from(self.openalex) + u8::from(self.scholar)
    }

    /// Sources that voted review, in processing order.
    pub fn voting_sources(&self) -> Vec<Source> {
        [
            (Source::PubMed, self.pubmed),
            (Source::OpenAlex, self.openalex),
            (Source::Scholar, self.scholar),
        ]
        .into_iter()
        .filter_map(|(source, flag)| flag.then_some(source))
        .collect()
    }

    /// PubMed is the only source voting review.
    pub fn pubmed_sole_vote(&self) -> bool {
        self.pubmed && self.votes() == 1
    }
}

/// A MeSH term and its experimental probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshTermProbability {
    pub term: String,
    pub p: f64,
}

impl MeshTermProbability {
    /// Distance from 0.5; larger is more discriminative.
    pub fn discrimination(&self) -> f64 {
        (self.p - 0.5).abs()
    }
}

/// What the refiner's numbers point at, before unknown-mode is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefineHint {
    Experimental,
    Review,
    MeshAmbiguous,
    LowTerms,
    NoSignal,
}

/// Output of the MeSH probability refiner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRefinement {
    pub score_review: f64,
    pub score_experimental: f64,
    /// `score_experimental − score_review`.
    pub delta: f64,
    pub k_terms: usize,
    pub terms_used: Vec<String>,
    /// Most discriminative terms, `|p − 0.5|` descending, ties by term.
    pub top_terms: Vec<MeshTermProbability>,
    pub hint: RefineHint,
}

/// Final, auditable outcome for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub label: Label,
    /// `scores.review − scores.non_review`, full precision.
    pub margin: f64,
    pub reason: ReasonCode,
    pub scores: ScoreVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<VoteTally>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement: Option<MeshRefinement>,
    /// Bounded audit trail. Never read back by the engine.
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

impl Decision {
    pub fn new(label: Label, reason: ReasonCode, scores: ScoreVector) -> Self {
        Self {
            label,
            margin: scores.margin(),
            reason,
            scores,
            votes: None,
            refinement: None,
            evidence: Vec::new(),
        }
    }

    pub fn with_votes(mut self, votes: VoteTally) -> Self {
        self.votes = Some(votes);
        self
    }

    pub fn with_refinement(mut self, refinement: MeshRefinement) -> Self {
        self.refinement = Some(refinement);
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<EvidenceItem>) -> Self {
        self.evidence = evidence;
        self
    }

    pub fn vote_count(&self) -> Option<u8> {
        self.votes.map(|v| v.votes())
    }
}
