//! Built-in term tables, one module per scoring profile.

pub mod class_vote;
pub mod margin;
pub mod vote;

use docclass_core::ProfileKind;

use crate::canonicalize::SynonymRule;
use crate::tables::TermTables;

/// The compiled-in tables for `profile`.
pub fn for_profile(profile: ProfileKind) -> TermTables {
    match profile {
        ProfileKind::Margin => margin::tables(),
        ProfileKind::Vote => vote::tables(),
        ProfileKind::ClassVote => class_vote::tables(),
    }
}

pub(crate) fn rules(entries: &[(&str, &str)]) -> Vec<SynonymRule> {
    entries
        .iter()
        .map(|(from, to)| SynonymRule::new(*from, *to))
        .collect()
}

pub(crate) fn term_set(terms: &[&str]) -> std::collections::BTreeSet<String> {
    terms.iter().map(|t| t.to_string()).collect()
}
