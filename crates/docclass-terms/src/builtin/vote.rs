//! Tables for the two-of-three vote profile.

use docclass_core::{Field, ProfileKind, Source};

use super::{rules, term_set};
use crate::dictionary::TermDictionary;
use crate::tables::TermTables;
use crate::weights::{FieldKindWeights, KindWeights, SourceWeights};

pub const SYNONYMS: &[(&str, &str)] = &[
    ("meta analysis", "meta-analysis"),
    ("randomised controlled trial", "randomized controlled trial"),
    ("case reports", "case report"),
];

/// Publication-type tokens that count as a review vote.
pub const REVIEW_ALIASES: &[&str] = &[
    "review",
    "systematic review",
    "meta-analysis",
    "meta analysis",
    "literature review",
    "mini review",
    "narrative review",
    "scoping review",
    "umbrella review",
    "rapid review",
    "evidence synthesis",
];

/// A meta-analysis carrying any of these qualifiers is not overridden to review.
pub const EXPERIMENTAL_QUALIFIERS: &[&str] = &[
    "methods",
    "drug therapy",
    "adverse effects",
    "chemistry",
    "metabolism",
    "pharmacology",
    "radiation effects",
    "ultrastructure",
    "genetics",
    "immunology",
];

pub const EXPERIMENTAL_DESCRIPTORS: &[&str] = &[
    "in vitro techniques",
    "cell line",
    "cell lines",
    "animals",
    "animal",
    "disease models",
    "randomized controlled trial as topic",
    "double-blind method",
    "treatment outcome",
];

pub fn tables() -> TermTables {
    // Each voting source counts once.
    let source_weights = SourceWeights::from_entries(&[
        (Source::PubMed, 1.0),
        (Source::OpenAlex, 1.0),
        (Source::Scholar, 1.0),
    ]);

    TermTables {
        profile: ProfileKind::Vote,
        synonyms: rules(SYNONYMS),
        dictionary: TermDictionary::new(),
        source_weights,
        field_weights: FieldKindWeights::from_entries(&[(
            Field::PublicationType,
            KindWeights::new(1.0, 0.0, 0.0),
        )]),
        review_aliases: term_set(REVIEW_ALIASES),
        experimental_qualifiers: term_set(EXPERIMENTAL_QUALIFIERS),
        experimental_descriptors: term_set(EXPERIMENTAL_DESCRIPTORS),
    }
}
