//! Parallel batch classification.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use docclass_core::{Decision, Record};

use crate::engine::ClassificationEngine;

/// A decision tagged with the identifier of the record it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub record_id: String,
    #[serde(flatten)]
    pub decision: Decision,
}

/// Classify `records` in parallel. Output order matches input order.
pub fn classify_batch(engine: &ClassificationEngine, records: &[Record]) -> Vec<ClassifiedRecord> {
    let span = crate::batch_span!(records.len());
    let _guard = span.enter();

    let results: Vec<ClassifiedRecord> = records
        .par_iter()
        .map(|record| ClassifiedRecord {
            record_id: record.id.clone(),
            decision: engine.classify_record(record),
        })
        .collect();

    tracing::debug!(count = results.len(), profile = %engine.profile(), "batch classified");
    results
}
