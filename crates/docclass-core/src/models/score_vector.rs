use serde::{Deserialize, Serialize};

use super::{Signal, SignalKind};
use crate::constants::DISPLAY_DECIMALS;

/// Class totals. Unbounded, never negative; all-zero means no evidence.
///
/// Under the class-vote profile `non_review` carries the experimental total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub review: f64,
    pub non_review: f64,
    #[serde(default)]
    pub unknown: f64,
}

impl ScoreVector {
    /// Add one signal's points to its class.
    pub fn add(&mut self, signal: &Signal) {
        match signal.kind {
            SignalKind::Review => self.review += signal.points,
            SignalKind::NonReview => self.non_review += signal.points,
            SignalKind::Unknown => self.unknown += signal.points,
        }
    }

    pub fn get(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::Review => self.review,
            SignalKind::NonReview => self.non_review,
            SignalKind::Unknown => self.unknown,
        }
    }

    /// `review − non_review`.
    pub fn margin(&self) -> f64 {
        self.review - self.non_review
    }

    pub fn is_empty(&self) -> bool {
        self.review == 0.0 && self.non_review == 0.0 && self.unknown == 0.0
    }

    /// Copy rounded for display. Never compare thresholds against this.
    pub fn rounded(&self) -> Self {
        Self {
            review: round_display(self.review),
            non_review: round_display(self.non_review),
            unknown: round_display(self.unknown),
        }
    }
}

/// Round to the display precision used in logs and output files.
pub fn round_display(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMALS);
    (value * factor).round() / factor
}
