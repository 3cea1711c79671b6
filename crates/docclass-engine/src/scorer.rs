//! Signal summation.

use docclass_core::{ScoreVector, Signal};

/// Sum signal points per kind. No normalization, no clipping.
pub fn score(signals: &[Signal]) -> ScoreVector {
    let mut scores = ScoreVector::default();
    for signal in signals {
        scores.add(signal);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use docclass_core::{Field, SignalKind, Source};

    fn signal(kind: SignalKind, points: f64) -> Signal {
        Signal {
            source: Source::PubMed,
            field: Field::PublicationType,
            kind,
            token: "t".to_string(),
            weight: 1.0,
            points,
        }
    }

    #[test]
    fn empty_input_scores_zero() {
        assert!(score(&[]).is_empty());
    }

    #[test]
    fn sums_per_kind() {
        let scores = score(&[
            signal(SignalKind::Review, 6.0),
            signal(SignalKind::NonReview, 2.4),
            signal(SignalKind::Review, 1.0),
        ]);
        assert_eq!(scores.review, 7.0);
        assert_eq!(scores.non_review, 2.4);
        assert_eq!(scores.unknown, 0.0);
    }
}
