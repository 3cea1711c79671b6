use std::fmt;

use serde::{Deserialize, Serialize};

/// Bibliographic provider that reported a field value.
///
/// Declaration order is the fixed processing order used for evidence ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    PubMed,
    OpenAlex,
    Scholar,
    Crossref,
}

impl Source {
    pub const ALL: [Source; 4] = [
        Source::PubMed,
        Source::OpenAlex,
        Source::Scholar,
        Source::Crossref,
    ];

    /// Sources that cast a publication-type vote under the vote profile.
    pub const VOTING: [Source; 3] = [Source::PubMed, Source::OpenAlex, Source::Scholar];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PubMed => "pubmed",
            Self::OpenAlex => "openalex",
            Self::Scholar => "scholar",
            Self::Crossref => "crossref",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pubmed" => Some(Self::PubMed),
            "openalex" => Some(Self::OpenAlex),
            "scholar" => Some(Self::Scholar),
            "crossref" => Some(Self::Crossref),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical field carried by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PublicationType,
    MeshDescriptor,
    MeshQualifier,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::PublicationType,
        Field::MeshDescriptor,
        Field::MeshQualifier,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PublicationType => "publication_type",
            Self::MeshDescriptor => "mesh_descriptor",
            Self::MeshQualifier => "mesh_qualifier",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "publication_type" => Some(Self::PublicationType),
            "mesh_descriptor" => Some(Self::MeshDescriptor),
            "mesh_qualifier" => Some(Self::MeshQualifier),
            _ => None,
        }
    }

    pub fn is_mesh(self) -> bool {
        matches!(self, Self::MeshDescriptor | Self::MeshQualifier)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
