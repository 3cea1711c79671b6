//! # docclass-engine
//!
//! Raw per-source strings in, auditable [`Decision`](docclass_core::Decision) out.
//!
//! Pipeline: [`CanonicalFields`] (tokenize) → [`extract`] (signals) →
//! [`score`] (score vector) → a [`ScoringProfile`] strategy (label + reason),
//! with the MeSH refiner consulted by the vote profile on single-vote records.
//! [`ClassificationEngine`] owns the immutable tables and is `Send + Sync`;
//! [`classify_batch`] fans records out over rayon.

pub mod batch;
pub mod engine;
pub mod evidence;
pub mod extract;
pub mod profile;
pub mod scorer;
pub mod spans;
pub mod strategy;

pub use batch::{classify_batch, ClassifiedRecord};
pub use engine::ClassificationEngine;
pub use evidence::select_evidence;
pub use extract::{extract, extract_all, CanonicalFields};
pub use profile::ScoringProfile;
pub use scorer::score;
