//! ClassificationEngine: immutable tables plus one scoring profile.

use std::path::Path;
use std::sync::Arc;

use docclass_core::errors::ConfigError;
use docclass_core::{Decision, DocclassConfig, DocclassResult, ProfileKind, RawFieldSet, Record};
use docclass_mesh::MeshProbabilityTable;
use docclass_terms::{Canonicalizer, TermTables};

use crate::extract::CanonicalFields;
use crate::profile::ScoringProfile;
use crate::spans::names;

/// Classifies records. Holds only read-only data, so one instance can be
/// shared across threads.
pub struct ClassificationEngine {
    tables: TermTables,
    canonicalizer: Canonicalizer,
    profile: ScoringProfile,
    evidence_limit: usize,
    mesh: Option<Arc<MeshProbabilityTable>>,
}

impl ClassificationEngine {
    /// Assemble an engine from already-loaded tables.
    ///
    /// `tables` must have been built for `config.engine.profile`.
    pub fn new(
        config: &DocclassConfig,
        tables: TermTables,
        mesh: Option<Arc<MeshProbabilityTable>>,
    ) -> DocclassResult<Self> {
        config.validate()?;
        if tables.profile != config.engine.profile {
            return Err(ConfigError::ValidationFailed {
                field: "engine.profile".to_string(),
                message: format!(
                    "term tables were built for '{}' but the engine runs '{}'",
                    tables.profile, config.engine.profile
                ),
            }
            .into());
        }
        tables.validate()?;
        let canonicalizer = tables.canonicalizer(&config.engine.separator_chars())?;
        let profile = ScoringProfile::from_config(config, mesh.clone())?;
        Ok(Self {
            tables,
            canonicalizer,
            profile,
            evidence_limit: config.engine.evidence_limit,
            mesh,
        })
    }

    /// Load term tables and the probability table from `config.paths`, then build.
    ///
    /// The probability table is loaded whenever a path is configured; only
    /// the vote profile requires one.
    pub fn from_config(config: &DocclassConfig) -> DocclassResult<Self> {
        let tables = TermTables::load(
            config.engine.profile,
            config.paths.terms.as_deref().map(Path::new),
        )?;
        let mesh = match config.paths.mesh.as_deref() {
            Some(path) => Some(Arc::new(MeshProbabilityTable::from_path(Path::new(path))?)),
            None => None,
        };
        Self::new(config, tables, mesh)
    }

    pub fn profile(&self) -> ProfileKind {
        self.profile.kind()
    }

    pub fn tables(&self) -> &TermTables {
        &self.tables
    }

    pub fn mesh_table(&self) -> Option<&MeshProbabilityTable> {
        self.mesh.as_deref()
    }

    /// Classify one field set. Pure; never fails.
    pub fn classify(&self, fields: &RawFieldSet) -> Decision {
        let canonical = CanonicalFields::from_raw(fields, &self.canonicalizer);
        self.profile
            .decide(&canonical, &self.tables, self.evidence_limit)
    }

    /// Classify one record, emitting a span and a structured decision event.
    pub fn classify_record(&self, record: &Record) -> Decision {
        let span = crate::classify_span!(record.id, self.profile());
        let _guard = span.enter();

        let decision = self.classify(&record.fields);

        if decision.reason.is_override() {
            tracing::warn!(
                target: names::DECISION_TARGET,
                record_id = %record.id,
                reason = %decision.reason,
                label = %decision.label,
                "rule override applied"
            );
        }
        tracing::info!(
            target: names::DECISION_TARGET,
            record_id = %record.id,
            label = %decision.label,
            reason = %decision.reason,
            margin = decision.margin,
            votes = decision.vote_count().map(u64::from),
            delta = decision.refinement.as_ref().map(|r| r.delta),
            "classified"
        );

        decision
    }
}
