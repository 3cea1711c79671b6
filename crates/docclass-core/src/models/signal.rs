use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Field, Source};

/// Class a matched token argues for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKind {
    Review,
    /// Non-review evidence; reported as `experimental` by the class-vote profile.
    NonReview,
    /// Only produced by the class-vote profile.
    Unknown,
}

impl SignalKind {
    pub const ALL: [SignalKind; 3] = [SignalKind::Review, SignalKind::NonReview, SignalKind::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::NonReview => "non-review",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of classification evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub source: Source,
    pub field: Field,
    pub kind: SignalKind,
    pub token: String,
    /// Source reliability weight.
    pub weight: f64,
    /// `weight × field_kind_weight(field, kind)`.
    pub points: f64,
}
