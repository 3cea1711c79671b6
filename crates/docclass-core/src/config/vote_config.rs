use serde::{Deserialize, Serialize};

use super::defaults;

/// Vote profile and MeSH refinement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteConfig {
    /// Minimum |delta| for the refiner to commit to a label.
    pub delta: f64,
    /// Minimum usable MeSH terms before an ambiguous delta counts as evidence.
    pub k_min: usize,
    /// Resolve ambiguous records to `unknown` instead of `non-review`.
    pub unknown_mode: bool,
    /// Bonus added to the review score when PubMed is the only review vote.
    pub prefer_pubmed_epsilon: f64,
    /// Number of MeSH terms reported in the evidence payload.
    pub top_terms: usize,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            delta: defaults::DEFAULT_DELTA,
            k_min: defaults::DEFAULT_K_MIN,
            unknown_mode: defaults::DEFAULT_UNKNOWN_MODE,
            prefer_pubmed_epsilon: defaults::DEFAULT_PREFER_PUBMED_EPSILON,
            top_terms: defaults::DEFAULT_TOP_MESH_TERMS,
        }
    }
}
