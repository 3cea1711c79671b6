//! # docclass-mesh
//!
//! MeSH probability refinement for records the publication-type vote leaves
//! ambiguous. [`MeshProbabilityTable`] maps canonical MeSH terms to the
//! probability that a paper tagged with them is experimental; [`refine`]
//! turns a record's terms into a [`MeshRefinement`](docclass_core::MeshRefinement).

pub mod refiner;
pub mod table;

pub use refiner::{refine, RefineParams};
pub use table::MeshProbabilityTable;
