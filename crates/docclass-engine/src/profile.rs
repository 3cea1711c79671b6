//! The scoring profile a classification engine runs.

use std::sync::Arc;

use docclass_core::errors::TableError;
use docclass_core::{Decision, DocclassConfig, ProfileKind};
use docclass_mesh::MeshProbabilityTable;
use docclass_terms::TermTables;

use crate::extract::CanonicalFields;
use crate::strategy::{ClassVoteStrategy, MarginStrategy, VoteStrategy};

/// One consolidated engine, three decision rules. Each variant has its own
/// label vocabulary: margin and vote emit review / non-review / unknown,
/// class vote emits review / experimental / unknown.
#[derive(Debug, Clone)]
pub enum ScoringProfile {
    Margin(MarginStrategy),
    Vote(VoteStrategy),
    ClassVote(ClassVoteStrategy),
}

impl ScoringProfile {
    /// Build the strategy named by `config.engine.profile`.
    ///
    /// The vote profile cannot run without a probability table.
    pub fn from_config(
        config: &DocclassConfig,
        mesh: Option<Arc<MeshProbabilityTable>>,
    ) -> Result<Self, TableError> {
        Ok(match config.engine.profile {
            ProfileKind::Margin => Self::Margin(MarginStrategy::from(&config.margin)),
            ProfileKind::ClassVote => Self::ClassVote(ClassVoteStrategy::from(&config.class_vote)),
            ProfileKind::Vote => {
                let mesh = mesh.ok_or_else(|| TableError::Required {
                    profile: ProfileKind::Vote.to_string(),
                })?;
                Self::Vote(VoteStrategy::new(&config.vote, mesh))
            }
        })
    }

    pub fn kind(&self) -> ProfileKind {
        match self {
            Self::Margin(_) => ProfileKind::Margin,
            Self::Vote(_) => ProfileKind::Vote,
            Self::ClassVote(_) => ProfileKind::ClassVote,
        }
    }

    pub fn decide(&self, fields: &CanonicalFields, tables: &TermTables, evidence_limit: usize) -> Decision {
        match self {
            Self::Margin(s) => s.decide(fields, tables, evidence_limit),
            Self::Vote(s) => s.decide(fields, tables, evidence_limit),
            Self::ClassVote(s) => s.decide(fields, tables, evidence_limit),
        }
    }
}
