//! Canonical tokens per `(source, field)` and signal extraction.

use std::collections::BTreeMap;

use docclass_core::{Field, RawFieldSet, Signal, Source};
use docclass_terms::{Canonicalizer, TermTables};

/// Canonical tokens for every `(source, field)` of one record.
///
/// Recomputed per classification; absent pairs read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalFields {
    tokens: BTreeMap<(Source, Field), Vec<String>>,
}

impl CanonicalFields {
    pub fn from_raw(raw: &RawFieldSet, canonicalizer: &Canonicalizer) -> Self {
        let tokens = raw
            .iter()
            .filter_map(|(source, field, value)| {
                let canonical = canonicalizer.canonicalize(Some(value));
                (!canonical.is_empty()).then_some(((source, field), canonical))
            })
            .collect();
        Self { tokens }
    }

    pub fn get(&self, source: Source, field: Field) -> &[String] {
        self.tokens
            .get(&(source, field))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if `token` appears in `field` of any of `sources`.
    pub fn contains(&self, sources: &[Source], field: Field, token: &str) -> bool {
        sources
            .iter()
            .any(|source| self.get(*source, field).iter().any(|t| t == token))
    }

    /// Tokens of `field` across `sources`, deduplicated in source order.
    pub fn collect(&self, sources: &[Source], field: Field) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for source in sources {
            for token in self.get(*source, field) {
                if !out.contains(&token.as_str()) {
                    out.push(token.as_str());
                }
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Signals for one `(source, field)` token list.
///
/// Each token matching one of the field's sets yields exactly one signal
/// worth `source_weight × field_kind_weight`; other tokens yield nothing.
pub fn extract(tokens: &[String], source: Source, field: Field, tables: &TermTables) -> Vec<Signal> {
    let weight = tables.source_weights.get(source);
    tokens
        .iter()
        .filter_map(|token| {
            let kind = tables.dictionary.lookup(field, token)?;
            Some(Signal {
                source,
                field,
                kind,
                token: token.clone(),
                weight,
                points: weight * tables.field_weights.get(field, kind),
            })
        })
        .collect()
}

/// Signals for a whole record in fixed source-then-field order.
pub fn extract_all(fields: &CanonicalFields, tables: &TermTables) -> Vec<Signal> {
    let mut signals = Vec::new();
    for source in Source::ALL {
        for field in Field::ALL {
            signals.extend(extract(fields.get(source, field), source, field, tables));
        }
    }
    signals
}
