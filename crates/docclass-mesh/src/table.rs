//! Loader for the MeSH experimental-probability table.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use docclass_core::errors::TableError;
use docclass_terms::canonicalize_mesh;

const TERM_COLUMNS: &[&str] = &["custom", "term"];
const PROBABILITY_COLUMNS: &[&str] = &["experimental_probability", "probability"];

/// Canonical MeSH term → p(experimental) in `[0, 1]`.
///
/// Keys are stored through [`canonicalize_mesh`], so lookups must use the
/// same normalization. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshProbabilityTable {
    probabilities: HashMap<String, f64>,
}

impl MeshProbabilityTable {
    /// Read a CSV (or `.tsv`) file with a term column and a probability column.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let file = std::fs::File::open(path).map_err(|_| TableError::NotFound {
            path: path.display().to_string(),
        })?;
        let delimiter = if path.extension().is_some_and(|ext| ext == "tsv") {
            b'\t'
        } else {
            b','
        };
        let table = Self::from_reader_with_delimiter(file, delimiter)?;
        tracing::info!(
            path = %path.display(),
            terms = table.len(),
            "mesh probability table loaded"
        );
        Ok(table)
    }

    /// Read comma-separated data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::from_reader_with_delimiter(reader, b',')
    }

    pub fn from_reader_with_delimiter<R: Read>(reader: R, delimiter: u8) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| TableError::ReadFailed {
                reason: e.to_string(),
            })?
            .clone();
        let term_idx = find_column(&headers, TERM_COLUMNS)?;
        let prob_idx = find_column(&headers, PROBABILITY_COLUMNS)?;

        let mut probabilities = HashMap::new();
        let mut overwritten = 0usize;
        for (i, record) in csv_reader.records().enumerate() {
            // Header is line 1.
            let row = i + 2;
            let record = record.map_err(|e| TableError::ReadFailed {
                reason: e.to_string(),
            })?;
            let term = record.get(term_idx).map(str::trim).unwrap_or_default();
            if term.is_empty() {
                continue;
            }
            let raw_p = record.get(prob_idx).map(str::trim).unwrap_or_default();
            let p: f64 = raw_p.parse().map_err(|_| TableError::InvalidRow {
                row,
                reason: format!("probability '{raw_p}' is not a number"),
            })?;
            if !(0.0..=1.0).contains(&p) {
                return Err(TableError::InvalidRow {
                    row,
                    reason: format!("probability {p} is outside [0, 1]"),
                });
            }
            if probabilities.insert(canonicalize_mesh(term), p).is_some() {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            tracing::debug!(overwritten, "duplicate canonical mesh terms, last value kept");
        }
        Ok(Self { probabilities })
    }

    /// Build from `(term, p)` pairs. Terms are canonicalized; later pairs win.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut probabilities = HashMap::new();
        for (i, (term, p)) in pairs.into_iter().enumerate() {
            if !(0.0..=1.0).contains(&p) {
                return Err(TableError::InvalidRow {
                    row: i + 1,
                    reason: format!("probability {p} is outside [0, 1]"),
                });
            }
            probabilities.insert(canonicalize_mesh(term.as_ref()), p);
        }
        Ok(Self { probabilities })
    }

    /// Probability for an already-canonical term.
    pub fn get(&self, canonical_term: &str) -> Option<f64> {
        self.probabilities.get(canonical_term).copied()
    }

    pub fn contains(&self, canonical_term: &str) -> bool {
        self.probabilities.contains_key(canonical_term)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| {
            let h = h.trim().trim_start_matches('\u{feff}').to_lowercase();
            names.contains(&h.as_str())
        })
        .ok_or_else(|| TableError::MissingColumn {
            column: names.join(" | "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_canonicalized() {
        let csv = "Custom,experimental_probability\nRats,0.9\nCell Lines,0.8\n";
        let table = MeshProbabilityTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("rat"), Some(0.9));
        assert_eq!(table.get("cell line"), Some(0.8));
        assert_eq!(table.get("Rats"), None);
    }

    #[test]
    fn alias_columns_are_accepted() {
        let csv = "id,TERM,Probability\n1,Mice,0.95\n2,,0.5\n";
        let table = MeshProbabilityTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("mice"), Some(0.95));
    }

    #[test]
    fn missing_column_fails() {
        let csv = "Custom,score\nRats,0.9\n";
        let err = MeshProbabilityTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { .. }));
    }

    #[test]
    fn out_of_range_probability_fails_with_row() {
        let csv = "Custom,experimental_probability\nRats,0.9\nMice,1.5\n";
        match MeshProbabilityTable::from_reader(csv.as_bytes()) {
            Err(TableError::InvalidRow { row, .. }) => assert_eq!(row, 3),
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_probability_fails() {
        let csv = "Custom,experimental_probability\nRats,high\n";
        let err = MeshProbabilityTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn pairs_reject_nan() {
        assert!(MeshProbabilityTable::from_pairs([("rats", f64::NAN)]).is_err());
        let table = MeshProbabilityTable::from_pairs([("Rats", 0.1), ("rat", 0.7)]).unwrap();
        assert_eq!(table.get("rat"), Some(0.7));
    }
}
