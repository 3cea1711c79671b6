use serde::{Deserialize, Serialize};

/// Locations of static data loaded once per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// TOML file overriding the profile's built-in term tables.
    pub terms: Option<String>,
    /// CSV file with experimental MeSH probabilities.
    pub mesh: Option<String>,
}
