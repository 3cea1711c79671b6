//! Source reliability weights and per-field kind weights.
//!
//! `points = source_weight × field_kind_weight`. A missing entry weighs 0.0,
//! so an unlisted source or field simply never contributes.

use std::collections::BTreeMap;

use docclass_core::errors::DictionaryError;
use docclass_core::{Field, SignalKind, Source};
use serde::{Deserialize, Serialize};

/// Source → reliability weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceWeights {
    weights: BTreeMap<Source, f64>,
}

impl SourceWeights {
    pub fn from_entries(entries: &[(Source, f64)]) -> Self {
        Self {
            weights: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, source: Source) -> f64 {
        self.weights.get(&source).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, source: Source, weight: f64) {
        self.weights.insert(source, weight);
    }

    pub fn validate(&self) -> Result<(), DictionaryError> {
        for (source, weight) in &self.weights {
            check_weight(&format!("source_weights.{source}"), *weight)?;
        }
        Ok(())
    }
}

/// Weights per signal kind for a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindWeights {
    pub review: f64,
    pub non_review: f64,
    pub unknown: f64,
}

impl KindWeights {
    pub fn new(review: f64, non_review: f64, unknown: f64) -> Self {
        Self {
            review,
            non_review,
            unknown,
        }
    }

    pub fn get(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::Review => self.review,
            SignalKind::NonReview => self.non_review,
            SignalKind::Unknown => self.unknown,
        }
    }
}

/// Field → kind → weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKindWeights {
    weights: BTreeMap<Field, KindWeights>,
}

impl FieldKindWeights {
    pub fn from_entries(entries: &[(Field, KindWeights)]) -> Self {
        Self {
            weights: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, field: Field, kind: SignalKind) -> f64 {
        self.weights
            .get(&field)
            .map(|w| w.get(kind))
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, field: Field, weights: KindWeights) {
        self.weights.insert(field, weights);
    }

    pub fn validate(&self) -> Result<(), DictionaryError> {
        for (field, weights) in &self.weights {
            for kind in SignalKind::ALL {
                check_weight(&format!("field_weights.{field}.{kind}"), weights.get(kind))?;
            }
        }
        Ok(())
    }
}

fn check_weight(name: &str, value: f64) -> Result<(), DictionaryError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DictionaryError::InvalidWeight {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}
