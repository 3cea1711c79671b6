//! Three-way class vote tables (review / experimental / unknown).

use docclass_core::{Field, ProfileKind, Source};

use super::{rules, term_set};
use crate::dictionary::{TermDictionary, TermSets};
use crate::tables::TermTables;
use crate::weights::{FieldKindWeights, KindWeights, SourceWeights};

/// PubMed's "Research Support, ..." types contain commas; they are fused
/// into a single token before splitting.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("review article", "review"),
    ("review-article", "review"),
    ("mini review", "review"),
    ("mini-review", "review"),
    ("meta analysis", "meta-analysis"),
    ("journal article", "journal-article"),
    ("journalarticle", "journal-article"),
    ("slr", "systematic review"),
    ("state-of-the-art", "state of the art"),
    ("research support, non-u.s. gov't", "research support"),
    ("research support, n.i.h., extramural", "research support"),
    ("research support, n.i.h., intramural", "research support"),
    ("research support, u.s. gov't, non-p.h.s.", "research support"),
    ("research support, u.s. gov't, p.h.s.", "research support"),
];

const REVIEW_TERMS: &[&str] = &[
    "review",
    "book review",
    "systematic review",
    "meta-analysis",
    "scoping review",
    "umbrella review",
    "correction",
    "survey",
    "overview",
    "state of the art",
    "bibliometric analysis",
    "editorial",
    "corrected and republished article",
    "address",
    "lecture",
    "news",
    "historical article",
    "comment",
    "video-audio media",
    "retracted publication",
];

const EXPERIMENTAL_TERMS: &[&str] = &[
    "comparative study",
    "evaluation study",
    "validation study",
    "case-control study",
    "cohort study",
    "proceedings-article",
    "posted-content",
    "preprint",
];

// Study designs live in the experimental set only.
const UNKNOWN_TERMS: &[&str] = &[
    "research support",
    "clinical trial",
    "randomized controlled trial",
    "clinical study",
    "note",
    "erratum",
    "data paper",
    "perspective",
    "opinion",
    "short survey",
];

pub fn tables() -> TermTables {
    let source_weights = SourceWeights::from_entries(&[
        (Source::PubMed, 4.0),
        (Source::OpenAlex, 3.0),
        (Source::Crossref, 3.0),
        (Source::Scholar, 2.0),
    ]);

    TermTables {
        profile: ProfileKind::ClassVote,
        synonyms: rules(SYNONYMS),
        dictionary: TermDictionary::new().with_field(
            Field::PublicationType,
            TermSets::new(REVIEW_TERMS, EXPERIMENTAL_TERMS, UNKNOWN_TERMS),
        ),
        source_weights,
        field_weights: FieldKindWeights::from_entries(&[(
            Field::PublicationType,
            KindWeights::new(1.0, 1.0, 1.0),
        )]),
        review_aliases: term_set(&[]),
        experimental_qualifiers: term_set(&[]),
        experimental_descriptors: term_set(&[]),
    }
}
