//! Raw field string → ordered, unique canonical tokens.

use std::collections::HashSet;

use docclass_core::constants::NULL_LIKE_VALUES;
use docclass_core::errors::DictionaryError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One synonym substitution: every whole-phrase occurrence of `from` becomes `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRule {
    pub from: String,
    pub to: String,
}

impl SynonymRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// True for values that providers use to mean "nothing here".
pub fn is_null_like(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || NULL_LIKE_VALUES
            .iter()
            .any(|null| trimmed.eq_ignore_ascii_case(null))
}

struct CompiledRule {
    pattern: Regex,
    replacement: String,
}

/// Compiled synonym table plus delimiter set.
///
/// Rules are applied one after another, in table order, over the whole
/// lower-cased string before it is split. A later rule sees the output of
/// the earlier ones, so overlapping keys depend on table order.
pub struct Canonicalizer {
    rules: Vec<CompiledRule>,
    delimiters: Vec<char>,
}

impl Canonicalizer {
    /// Compile `synonyms` once. Keys are lower-cased and matched literally.
    pub fn new(synonyms: &[SynonymRule], delimiters: &[char]) -> Result<Self, DictionaryError> {
        let mut rules = Vec::with_capacity(synonyms.len());
        for (index, rule) in synonyms.iter().enumerate() {
            let key = rule.from.trim().to_lowercase();
            if key.is_empty() {
                return Err(DictionaryError::InvalidSynonym {
                    index,
                    reason: "empty 'from' phrase".to_string(),
                });
            }
            let pattern =
                Regex::new(&phrase_pattern(&key)).map_err(|e| DictionaryError::InvalidSynonym {
                    index,
                    reason: e.to_string(),
                })?;
            rules.push(CompiledRule {
                pattern,
                replacement: rule.to.trim().to_lowercase(),
            });
        }
        Ok(Self {
            rules,
            delimiters: delimiters.to_vec(),
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Canonical tokens for one raw field value, first-occurrence order.
    ///
    /// Missing, blank and null-like input yields an empty list.
    pub fn canonicalize(&self, raw: Option<&str>) -> Vec<String> {
        let Some(raw) = raw else {
            return Vec::new();
        };
        if is_null_like(raw) {
            return Vec::new();
        }

        let mut text = raw.to_lowercase();
        for rule in &self.rules {
            // `NoExpand` keeps `$` in replacements literal.
            text = rule
                .pattern
                .replace_all(&text, regex::NoExpand(&rule.replacement))
                .into_owned();
        }

        let mut seen = HashSet::new();
        text.split(|c: char| self.delimiters.contains(&c))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter(|token| seen.insert(token.to_string()))
            .map(str::to_string)
            .collect()
    }
}

/// `\b` is only anchored on edges that are word characters; a boundary next to
/// punctuation at the end of the input could never match otherwise.
fn phrase_pattern(key: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = key.chars().next().is_some_and(is_word);
    let trail = key.chars().last().is_some_and(is_word);
    format!(
        "{}{}{}",
        if lead { r"\b" } else { "" },
        regex::escape(key),
        if trail { r"\b" } else { "" }
    )
}
