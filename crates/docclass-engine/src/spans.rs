//! Span definitions for classification operations.

/// Create a span around classifying one record.
#[macro_export]
macro_rules! classify_span {
    ($record_id:expr, $profile:expr) => {
        tracing::info_span!("docclass.classify", record_id = %$record_id, profile = %$profile)
    };
}

/// Create a span around a batch run.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("docclass.batch", batch_size = $batch_size)
    };
}

/// Span names and event targets as constants for programmatic use.
pub mod names {
    pub const CLASSIFY: &str = "docclass.classify";
    pub const BATCH: &str = "docclass.batch";
    /// Target of the per-record decision event.
    pub const DECISION_TARGET: &str = "docclass::decision";
}
