use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which consolidated classifier variant the engine runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Weighted signals, signed margin against a threshold.
    #[default]
    Margin,
    /// Two-of-three publication-type vote with MeSH probability refinement.
    Vote,
    /// Three-way weighted class vote (review / experimental / unknown).
    ClassVote,
}

impl ProfileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Margin => "margin",
            Self::Vote => "vote",
            Self::ClassVote => "class_vote",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "margin" => Some(Self::Margin),
            "vote" => Some(Self::Vote),
            "class_vote" => Some(Self::ClassVote),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings shared by every profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub profile: ProfileKind,
    /// Characters that split a raw field into tokens.
    pub separators: String,
    /// Maximum evidence items kept per decision.
    pub evidence_limit: usize,
}

impl EngineConfig {
    pub fn separator_chars(&self) -> Vec<char> {
        self.separators.chars().collect()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: ProfileKind::default(),
            separators: defaults::DEFAULT_SEPARATORS.to_string(),
            evidence_limit: defaults::DEFAULT_EVIDENCE_LIMIT,
        }
    }
}
