//! # docclass-terms
//!
//! Everything that turns raw provider strings into canonical tokens and
//! tells the engine what those tokens mean:
//!
//! - [`Canonicalizer`]: synonym substitution and delimiter splitting.
//! - [`canonicalize_mesh`]: MeSH term normalization for probability lookups.
//! - [`TermDictionary`] / [`TermSets`]: per-field review, non-review and unknown sets.
//! - [`SourceWeights`] / [`FieldKindWeights`]: reliability and field weights.
//! - [`TermTables`]: the immutable bundle built per profile, optionally
//!   overridden from TOML and validated at load time.

pub mod builtin;
pub mod canonicalize;
pub mod dictionary;
pub mod mesh;
pub mod tables;
pub mod weights;

pub use canonicalize::{is_null_like, Canonicalizer, SynonymRule};
pub use dictionary::{TermDictionary, TermSets};
pub use mesh::canonicalize_mesh;
pub use tables::TermTables;
pub use weights::{FieldKindWeights, KindWeights, SourceWeights};
