//! Record readers: delimited text (CSV/TSV) and JSON lines.

use std::path::Path;

use anyhow::{bail, Context, Result};
use docclass_core::{Field, RawFieldSet, Record, Source};

/// Header aliases → the `(source, field)` pair they carry.
const COLUMN_ALIASES: &[(&str, Source, Field)] = &[
    ("pubmed.publicationtype", Source::PubMed, Field::PublicationType),
    ("pubmed_publicationtype", Source::PubMed, Field::PublicationType),
    ("pubmed.publication_type", Source::PubMed, Field::PublicationType),
    ("pubmed_pt", Source::PubMed, Field::PublicationType),
    ("openalex.publicationtypes", Source::OpenAlex, Field::PublicationType),
    ("openalex_publicationtypes", Source::OpenAlex, Field::PublicationType),
    ("openalex.type", Source::OpenAlex, Field::PublicationType),
    ("openalex_pt", Source::OpenAlex, Field::PublicationType),
    ("scholar.publicationtypes", Source::Scholar, Field::PublicationType),
    ("scholar_publicationtypes", Source::Scholar, Field::PublicationType),
    ("scholar_pt", Source::Scholar, Field::PublicationType),
    ("crossref.type", Source::Crossref, Field::PublicationType),
    ("crossref_type", Source::Crossref, Field::PublicationType),
    ("crossref_pt", Source::Crossref, Field::PublicationType),
    ("pubmed.mesh_descriptors", Source::PubMed, Field::MeshDescriptor),
    ("pubmed_mesh_descriptors", Source::PubMed, Field::MeshDescriptor),
    ("pubmed_mesh_desc", Source::PubMed, Field::MeshDescriptor),
    ("pubmed.mesh_qualifiers", Source::PubMed, Field::MeshQualifier),
    ("pubmed_mesh_qualifiers", Source::PubMed, Field::MeshQualifier),
    ("pubmed_mesh_qual", Source::PubMed, Field::MeshQualifier),
    ("openalex.meshdescriptors", Source::OpenAlex, Field::MeshDescriptor),
    ("openalex_meshdescriptors", Source::OpenAlex, Field::MeshDescriptor),
    ("openalex_mesh_desc", Source::OpenAlex, Field::MeshDescriptor),
    ("openalex.meshqualifiers", Source::OpenAlex, Field::MeshQualifier),
    ("openalex_meshqualifiers", Source::OpenAlex, Field::MeshQualifier),
    ("openalex_mesh_qual", Source::OpenAlex, Field::MeshQualifier),
];

/// Identifier columns, most specific first.
const ID_COLUMNS: &[&str] = &[
    "doi",
    "pubmed_id",
    "pmid",
    "pmcid",
    "openalex.paperid",
    "openalex_id",
    "document_chembl_id",
    "id",
];

/// Candidate delimiters for sniffing. `|` is excluded: it separates values
/// inside a cell.
const DELIMITER_CANDIDATES: &[u8] = &[b',', b'\t', b';'];

/// Read every record in `path`.
///
/// `.jsonl` / `.ndjson` files are parsed as serialized [`Record`]s; anything
/// else is delimited text. `delimiter` overrides sniffing for delimited text.
pub fn read_records(path: &Path, delimiter: Option<u8>) -> Result<Vec<Record>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read input {}", path.display()))?;
    let text = decode(bytes, path);

    let records = if is_json_lines(path) {
        parse_json_lines(&text)
    } else {
        let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(&text));
        parse_delimited(&text, delimiter)
            .with_context(|| format!("invalid delimited input {}", path.display()))?
    };

    tracing::info!(path = %path.display(), records = records.len(), "input loaded");
    Ok(records)
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson"))
}

/// UTF-8, falling back to Latin-1 (every byte maps to the code point of the
/// same value).
fn decode(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), "input is not valid UTF-8, decoding as latin-1");
            err.into_bytes().iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Pick the candidate that occurs most often in the header line.
pub fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    DELIMITER_CANDIDATES
        .iter()
        .copied()
        .max_by_key(|&d| header.bytes().filter(|&b| b == d).count())
        .filter(|&d| header.as_bytes().contains(&d))
        .unwrap_or(b',')
}

/// Lower-case, trim, and drop a UTF-8 byte-order mark.
fn normalize_header(header: &str) -> String {
    header.trim().trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Known alias first, then the generic `<source>.<field>` form
/// (e.g. `scholar.mesh_descriptor`).
fn column_target(header: &str) -> Option<(Source, Field)> {
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _, _)| *alias == header)
        .map(|&(_, source, field)| (source, field))
        .or_else(|| {
            let (source, field) = header.split_once('.')?;
            Some((Source::parse(source)?, Field::parse(field)?))
        })
}

/// Parse delimited text with a header row.
///
/// The first column mapped to a given `(source, field)` wins; records without
/// any identifier value get `row:<n>` (1-based data row).
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("missing header row")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<(usize, Source, Field)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        let Some((source, field)) = column_target(header) else {
            continue;
        };
        if columns.iter().any(|&(_, s, f)| s == source && f == field) {
            tracing::debug!(column = %header, "duplicate column for the same field ignored");
            continue;
        }
        columns.push((idx, source, field));
    }
    if columns.is_empty() {
        tracing::warn!("no recognized publication-type or MeSH columns in input header");
    }

    let id_columns: Vec<usize> = ID_COLUMNS
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == name))
        .collect();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(row = i + 2, error = %err, "skipping malformed row");
                continue;
            }
        };
        let mut fields = RawFieldSet::new();
        for &(idx, source, field) in &columns {
            if let Some(value) = row.get(idx) {
                fields.insert(source, field, value);
            }
        }
        let id = id_columns
            .iter()
            .filter_map(|&idx| row.get(idx))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("row:{}", i + 1));
        records.push(Record::new(id, fields));
    }
    Ok(records)
}

/// One serialized [`Record`] per non-blank line.
///
/// Lines that do not parse are logged and skipped; they never abort the run.
pub fn parse_json_lines(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Record>(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                tracing::warn!(line = i + 1, error = %err, "skipping unparsable record");
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "records skipped from JSON lines input");
    }
    records
}

/// Parse a `--delimiter` argument: a single ASCII character, or `tab` / `\t`.
pub fn parse_delimiter_arg(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => bail!("delimiter must be a single ASCII character or 'tab', got '{value}'"),
    }
}
