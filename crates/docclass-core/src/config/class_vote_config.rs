use serde::{Deserialize, Serialize};

use super::defaults;

/// Class-vote profile configuration: minimum totals per winning class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassVoteConfig {
    pub min_review_score: f64,
    pub min_unknown_score: f64,
    pub min_experimental_score: f64,
}

impl Default for ClassVoteConfig {
    fn default() -> Self {
        Self {
            min_review_score: defaults::DEFAULT_MIN_REVIEW_SCORE,
            min_unknown_score: defaults::DEFAULT_MIN_UNKNOWN_SCORE,
            min_experimental_score: defaults::DEFAULT_MIN_EXPERIMENTAL_SCORE,
        }
    }
}
