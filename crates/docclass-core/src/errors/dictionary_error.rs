/// Static term-table inconsistencies, caught when tables are loaded.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("token '{token}' is listed as both {first} and {second} for field {field}")]
    Overlap {
        field: String,
        token: String,
        first: String,
        second: String,
    },

    #[error("invalid weight for {name}: {value} (must be finite and non-negative)")]
    InvalidWeight { name: String, value: f64 },

    #[error("synonym rule #{index} is invalid: {reason}")]
    InvalidSynonym { index: usize, reason: String },

    #[error("term table parse error in {path}: {message}")]
    ParseError { path: String, message: String },
}
