//! Fixture loader for docclass golden scenarios, sample probability tables,
//! and sample input files.
//!
//! Layout, relative to this crate:
//! - `golden/<profile>/*.json`: one scenario per file
//! - `mesh/*.csv`: MeSH probability tables
//! - `records/*`: CSV / JSON-lines inputs for the CLI

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixtures (this crate's manifest directory).
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Load every JSON fixture in `subdir`, paired with its file stem.
pub fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<(String, T)> {
    list_fixtures(subdir)
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            let value = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e));
            (name, value)
        })
        .collect()
}

/// Read a non-JSON fixture (CSV, TSV, JSON-lines) as text.
pub fn load_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_directories_are_populated() {
        for profile in ["margin", "vote", "class_vote"] {
            let files = list_fixtures(&format!("golden/{profile}"));
            assert!(!files.is_empty(), "no golden scenarios for {profile}");
        }
    }

    #[test]
    fn sample_mesh_table_exists() {
        assert!(fixture_exists("mesh/experimental_mesh.csv"));
        let text = load_text("mesh/experimental_mesh.csv");
        assert!(text.starts_with("Custom,experimental_probability"));
    }
}
