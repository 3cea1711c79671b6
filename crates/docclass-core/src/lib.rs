//! # docclass-core
//!
//! Foundation crate for the docclass review classifier.
//! Defines the record model, decisions, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{DocclassConfig, ProfileKind};
pub use errors::{DocclassError, DocclassResult};
pub use models::{
    Decision, EvidenceItem, Field, Label, MeshRefinement, MeshTermProbability, RawFieldSet,
    ReasonCode, Record, RefineHint, ScoreVector, Signal, SignalKind, Source, VoteTally,
    round_display,
};
