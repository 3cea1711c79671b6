/// MeSH probability table errors. All of them are fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("probability table not found: {path}")]
    NotFound { path: String },

    #[error("probability table is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("probability table row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("probability table read failed: {reason}")]
    ReadFailed { reason: String },

    #[error("a MeSH probability table is required by the {profile} profile")]
    Required { profile: String },
}
