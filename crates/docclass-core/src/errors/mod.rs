//! Error taxonomy. Every variant here is a load-time failure: classifying a
//! single record never produces an error.

mod config_error;
mod dictionary_error;
mod table_error;

pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use table_error::TableError;

/// Top-level error type for the docclass workspace.
#[derive(Debug, thiserror::Error)]
pub enum DocclassError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type DocclassResult<T> = Result<T, DocclassError>;
