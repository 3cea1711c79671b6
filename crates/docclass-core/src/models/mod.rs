//! Record, evidence, and decision types shared by every stage.

mod decision;
mod label;
mod raw_field_set;
mod score_vector;
mod signal;
mod source;

pub use decision::{
    Decision, EvidenceItem, MeshRefinement, MeshTermProbability, RefineHint, VoteTally,
};
pub use label::{Label, ReasonCode};
pub use raw_field_set::{RawFieldSet, Record};
pub use score_vector::{round_display, ScoreVector};
pub use signal::{Signal, SignalKind};
pub use source::{Field, Source};
