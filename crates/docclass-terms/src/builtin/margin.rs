//! Weighted-signal tables for the margin profile.

use docclass_core::{Field, ProfileKind, Source};

use super::{rules, term_set};
use crate::dictionary::{TermDictionary, TermSets};
use crate::tables::TermTables;
use crate::weights::{FieldKindWeights, KindWeights, SourceWeights};

/// Applied in this order; `scoping review` and `slr` fold into `systematic review`.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("review article", "review"),
    ("review-article", "review"),
    ("mini review", "review"),
    ("mini-review", "review"),
    ("literature review", "review"),
    ("umbrella review", "review"),
    ("narrative review", "review"),
    ("state-of-the-art review", "review"),
    ("integrative review", "review"),
    ("critical review", "review"),
    ("brief review", "review"),
    ("comprehensive review", "review"),
    ("evidence synthesis", "review"),
    ("qualitative review", "review"),
    ("overview of reviews", "review"),
    ("scoping review", "systematic review"),
    ("systematic literature review", "systematic review"),
    ("slr", "systematic review"),
    ("meta analysis", "meta-analysis"),
    ("meta-analysis", "meta-analysis"),
    ("network meta-analysis", "meta-analysis"),
    ("meta-synthesis", "meta-analysis"),
    ("journalarticle", "journal-article"),
    ("journal article", "journal-article"),
    ("journal-article", "journal-article"),
    ("research article", "journal-article"),
    ("original article", "journal-article"),
    ("brief communication", "journal-article"),
    ("rapid communication", "journal-article"),
];

const REVIEW_PT: &[&str] = &[
    "review",
    "systematic review",
    "meta-analysis",
    "scoping review",
    "umbrella review",
];

const NON_REVIEW_PT: &[&str] = &[
    "clinical trial",
    "randomized controlled trial",
    "controlled clinical trial",
    "case report",
    "case series",
    "cohort study",
    "case-control study",
    "cross-sectional study",
    "longitudinal study",
    "comparative study",
    "multicenter study",
    "evaluation study",
    "validation study",
    "replication study",
    "observational study",
    "letter",
    "short report",
    "technical note",
    "methods paper",
];

const REVIEW_DESCRIPTORS: &[&str] = &[
    "systematic reviews as topic",
    "meta-analysis as topic",
    "review",
    "evidence-based practice",
    "evidence synthesis",
];

// Comma-bearing MeSH headings arrive split ("disease models", "animal").
const NON_REVIEW_DESCRIPTORS: &[&str] = &[
    "drug evaluation",
    "preclinical",
    "in vitro techniques",
    "cell line",
    "disease models",
    "animal",
    "animals",
    "mice",
    "rats",
    "humans",
    "tissue culture techniques",
    "flow cytometry",
    "spectrometry",
    "mass",
    "chromatography",
    "high pressure liquid",
    "x-ray crystallography",
    "western blotting",
    "microscopy",
    "electron",
];

const REVIEW_QUALIFIERS: &[&str] = &["review", "analysis", "methods"];

const NON_REVIEW_QUALIFIERS: &[&str] = &[
    "therapy",
    "drug effects",
    "metabolism",
    "chemistry",
    "pharmacology",
    "physiology",
    "pathology",
    "enzymology",
    "antagonists & inhibitors",
    "administration & dosage",
    "adverse effects",
    "diagnosis",
    "genetics",
    "immunology",
];

pub fn tables() -> TermTables {
    let dictionary = TermDictionary::new()
        .with_field(
            Field::PublicationType,
            TermSets::new(REVIEW_PT, NON_REVIEW_PT, &[]),
        )
        .with_field(
            Field::MeshDescriptor,
            TermSets::new(REVIEW_DESCRIPTORS, NON_REVIEW_DESCRIPTORS, &[]),
        )
        .with_field(
            Field::MeshQualifier,
            TermSets::new(REVIEW_QUALIFIERS, NON_REVIEW_QUALIFIERS, &[]),
        );

    // PubMed's curated types are trusted most, Scholar's least.
    let source_weights = SourceWeights::from_entries(&[
        (Source::PubMed, 3.0),
        (Source::OpenAlex, 2.0),
        (Source::Crossref, 1.5),
        (Source::Scholar, 1.0),
    ]);

    let field_weights = FieldKindWeights::from_entries(&[
        (Field::PublicationType, KindWeights::new(2.0, 1.5, 0.0)),
        (Field::MeshDescriptor, KindWeights::new(1.0, 0.8, 0.0)),
        (Field::MeshQualifier, KindWeights::new(0.5, 0.6, 0.0)),
    ]);

    TermTables {
        profile: ProfileKind::Margin,
        synonyms: rules(SYNONYMS),
        dictionary,
        source_weights,
        field_weights,
        review_aliases: term_set(&[]),
        experimental_qualifiers: term_set(&[]),
        experimental_descriptors: term_set(&[]),
    }
}
