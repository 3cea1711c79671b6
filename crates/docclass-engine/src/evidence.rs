//! Bounded, deterministic evidence lists.

use std::cmp::Ordering;

use docclass_core::{EvidenceItem, Signal};

/// Strongest signals first: `|points|` descending, then source order, field, token.
pub fn select_evidence(signals: &[Signal], limit: usize) -> Vec<EvidenceItem> {
    let mut items: Vec<EvidenceItem> = signals.iter().map(EvidenceItem::from).collect();
    items.sort_by(compare);
    items.truncate(limit);
    items
}

fn compare(a: &EvidenceItem, b: &EvidenceItem) -> Ordering {
    b.points
        .abs()
        .total_cmp(&a.points.abs())
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.field.cmp(&b.field))
        .then_with(|| a.token.cmp(&b.token))
}
