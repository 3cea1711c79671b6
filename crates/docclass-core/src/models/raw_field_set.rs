use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Field, Source};

/// Raw delimited strings per `(source, field)` for one record.
///
/// Absent pairs and empty strings are equivalent. The engine only reads it.
/// On input, a `null` map, source or value is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawFieldSet {
    values: BTreeMap<Source, BTreeMap<Field, String>>,
}

impl RawFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, source: Source, field: Field, value: impl Into<String>) -> Self {
        self.insert(source, field, value);
        self
    }

    /// Set a value. Empty strings are not stored.
    pub fn insert(&mut self, source: Source, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            if let Some(fields) = self.values.get_mut(&source) {
                fields.remove(&field);
            }
            return;
        }
        self.values.entry(source).or_default().insert(field, value);
    }

    pub fn get(&self, source: Source, field: Field) -> Option<&str> {
        self.values
            .get(&source)
            .and_then(|fields| fields.get(&field))
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// True when no pair carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Non-blank values in fixed source-then-field order.
    pub fn iter(&self) -> impl Iterator<Item = (Source, Field, &str)> + '_ {
        self.values.iter().flat_map(|(source, fields)| {
            fields
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(move |(field, v)| (*source, *field, v.as_str()))
        })
    }
}

impl<'de> Deserialize<'de> for RawFieldSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<BTreeMap<Source, Option<BTreeMap<Field, Option<String>>>>> =
            Option::deserialize(deserializer)?;
        let mut fields = Self::new();
        for (source, values) in raw.unwrap_or_default() {
            for (field, value) in values.into_iter().flatten() {
                if let Some(value) = value {
                    fields.insert(source, field, value);
                }
            }
        }
        Ok(fields)
    }
}

/// An identified record as supplied by the upstream collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: RawFieldSet,
}

impl Record {
    pub fn new(id: impl Into<String>, fields: RawFieldSet) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
