//! Per-field term sets: which canonical tokens count as review, non-review
//! or unknown evidence.

use std::collections::{BTreeMap, BTreeSet};

use docclass_core::errors::DictionaryError;
use docclass_core::{Field, SignalKind};
use serde::{Deserialize, Serialize};

/// Review / non-review / unknown sets for one field. Must be pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermSets {
    pub review: BTreeSet<String>,
    pub non_review: BTreeSet<String>,
    pub unknown: BTreeSet<String>,
}

impl TermSets {
    pub fn new(review: &[&str], non_review: &[&str], unknown: &[&str]) -> Self {
        let collect = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect();
        Self {
            review: collect(review),
            non_review: collect(non_review),
            unknown: collect(unknown),
        }
    }

    pub fn set(&self, kind: SignalKind) -> &BTreeSet<String> {
        match kind {
            SignalKind::Review => &self.review,
            SignalKind::NonReview => &self.non_review,
            SignalKind::Unknown => &self.unknown,
        }
    }

    /// Kind of evidence `token` represents, if any.
    pub fn classify(&self, token: &str) -> Option<SignalKind> {
        SignalKind::ALL
            .into_iter()
            .find(|kind| self.set(*kind).contains(token))
    }

    pub fn len(&self) -> usize {
        self.review.len() + self.non_review.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_disjoint(&self, field: Field) -> Result<(), DictionaryError> {
        let kinds = SignalKind::ALL;
        for (i, first) in kinds.iter().enumerate() {
            for second in &kinds[i + 1..] {
                if let Some(token) = self.set(*first).intersection(self.set(*second)).next() {
                    return Err(DictionaryError::Overlap {
                        field: field.to_string(),
                        token: token.clone(),
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Term sets keyed by field. Fields without an entry never fire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermDictionary {
    fields: BTreeMap<Field, TermSets>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: Field, sets: TermSets) -> Self {
        self.fields.insert(field, sets);
        self
    }

    pub fn insert(&mut self, field: Field, sets: TermSets) {
        self.fields.insert(field, sets);
    }

    pub fn field(&self, field: Field) -> Option<&TermSets> {
        self.fields.get(&field)
    }

    /// Sets for `field`, created empty if absent.
    pub fn field_mut(&mut self, field: Field) -> &mut TermSets {
        self.fields.entry(field).or_default()
    }

    pub fn lookup(&self, field: Field, token: &str) -> Option<SignalKind> {
        self.fields.get(&field).and_then(|sets| sets.classify(token))
    }

    /// Total number of terms across all fields.
    pub fn term_count(&self) -> usize {
        self.fields.values().map(TermSets::len).sum()
    }

    /// Every field's sets must be pairwise disjoint.
    pub fn validate(&self) -> Result<(), DictionaryError> {
        for (field, sets) in &self.fields {
            sets.check_disjoint(*field)?;
        }
        Ok(())
    }
}
