//! The immutable per-profile term bundle and its TOML override layer.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use docclass_core::errors::DictionaryError;
use docclass_core::{Field, ProfileKind, Source};
use serde::Deserialize;

use crate::builtin;
use crate::canonicalize::{Canonicalizer, SynonymRule};
use crate::dictionary::TermDictionary;
use crate::weights::{FieldKindWeights, KindWeights, SourceWeights};

/// Everything a scoring profile needs to interpret canonical tokens.
///
/// Built once per run, validated, then shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct TermTables {
    pub profile: ProfileKind,
    /// Applied in order by the canonicalizer.
    pub synonyms: Vec<SynonymRule>,
    pub dictionary: TermDictionary,
    pub source_weights: SourceWeights,
    pub field_weights: FieldKindWeights,
    /// Publication-type tokens that count as a review vote.
    pub review_aliases: BTreeSet<String>,
    /// Qualifiers that block the meta-analysis override.
    pub experimental_qualifiers: BTreeSet<String>,
    /// Descriptors that block the guideline override.
    pub experimental_descriptors: BTreeSet<String>,
}

/// Shape of a term override file. Every section is optional.
///
/// ```toml
/// replace_synonyms = false
///
/// [[synonyms]]
/// from = "overview article"
/// to = "review"
///
/// [source_weights]
/// crossref = 2.0
///
/// [field_weights.mesh_qualifier]
/// review = 0.4
/// non_review = 0.6
///
/// [terms.publication_type]
/// non_review = ["letter", "case report"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TermTablesOverride {
    replace_synonyms: bool,
    synonyms: Vec<SynonymRule>,
    source_weights: BTreeMap<Source, f64>,
    field_weights: BTreeMap<Field, KindWeights>,
    terms: BTreeMap<Field, TermSetsOverride>,
    review_aliases: Option<Vec<String>>,
    experimental_qualifiers: Option<Vec<String>>,
    experimental_descriptors: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TermSetsOverride {
    review: Option<Vec<String>>,
    non_review: Option<Vec<String>>,
    unknown: Option<Vec<String>>,
}

impl TermTables {
    /// Compiled-in tables for `profile`.
    pub fn builtin(profile: ProfileKind) -> Self {
        builtin::for_profile(profile)
    }

    /// Built-in tables for `profile`, overridden by `override_path` if given,
    /// then validated.
    pub fn load(profile: ProfileKind, override_path: Option<&Path>) -> Result<Self, DictionaryError> {
        let mut tables = Self::builtin(profile);
        if let Some(path) = override_path {
            let content =
                std::fs::read_to_string(path).map_err(|e| DictionaryError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            tables.apply_toml(&content, &path.display().to_string())?;
        }
        tables.validate()?;
        tracing::info!(
            profile = %profile,
            synonyms = tables.synonyms.len(),
            terms = tables.dictionary.term_count(),
            review_aliases = tables.review_aliases.len(),
            "term tables loaded"
        );
        Ok(tables)
    }

    /// Built-in tables for `profile` overridden by a TOML string, validated.
    pub fn from_toml(profile: ProfileKind, toml_str: &str) -> Result<Self, DictionaryError> {
        let mut tables = Self::builtin(profile);
        tables.apply_toml(toml_str, "<string>")?;
        tables.validate()?;
        Ok(tables)
    }

    fn apply_toml(&mut self, toml_str: &str, origin: &str) -> Result<(), DictionaryError> {
        let overrides: TermTablesOverride =
            toml::from_str(toml_str).map_err(|e| DictionaryError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        if overrides.replace_synonyms {
            self.synonyms.clear();
        }
        self.synonyms.extend(overrides.synonyms);

        for (source, weight) in overrides.source_weights {
            self.source_weights.set(source, weight);
        }
        for (field, weights) in overrides.field_weights {
            self.field_weights.set(field, weights);
        }
        for (field, sets) in overrides.terms {
            let target = self.dictionary.field_mut(field);
            if let Some(terms) = sets.review {
                target.review = normalize_terms(terms);
            }
            if let Some(terms) = sets.non_review {
                target.non_review = normalize_terms(terms);
            }
            if let Some(terms) = sets.unknown {
                target.unknown = normalize_terms(terms);
            }
        }
        if let Some(terms) = overrides.review_aliases {
            self.review_aliases = normalize_terms(terms);
        }
        if let Some(terms) = overrides.experimental_qualifiers {
            self.experimental_qualifiers = normalize_terms(terms);
        }
        if let Some(terms) = overrides.experimental_descriptors {
            self.experimental_descriptors = normalize_terms(terms);
        }
        Ok(())
    }

    /// Load-time consistency checks: disjoint sets, sane weights, compilable synonyms.
    pub fn validate(&self) -> Result<(), DictionaryError> {
        self.dictionary.validate()?;
        self.source_weights.validate()?;
        self.field_weights.validate()?;
        Canonicalizer::new(&self.synonyms, &[])?;
        Ok(())
    }

    /// Canonicalizer over this table's synonyms.
    pub fn canonicalizer(&self, delimiters: &[char]) -> Result<Canonicalizer, DictionaryError> {
        Canonicalizer::new(&self.synonyms, delimiters)
    }

    pub fn is_review_alias(&self, token: &str) -> bool {
        self.review_aliases.contains(token)
    }
}

fn normalize_terms(terms: Vec<String>) -> BTreeSet<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
