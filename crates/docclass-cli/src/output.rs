//! Result writers and the per-record audit log.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use docclass_core::{round_display, Decision, Label, RawFieldSet, ReasonCode, Record};
use docclass_engine::ClassifiedRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One flat row per record, evidence as compact JSON.
    Csv,
    /// One full decision object per line.
    Jsonl,
}

/// Flat CSV row. Numbers are rounded for display; `None` renders as an empty cell.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    record_id: &'a str,
    label: Label,
    reason: ReasonCode,
    review_score: f64,
    non_review_score: f64,
    unknown_score: f64,
    margin: f64,
    votes: Option<u8>,
    mesh_delta: Option<f64>,
    mesh_k_terms: Option<usize>,
    evidence: String,
    /// Most discriminative MeSH terms from the refiner, as compact JSON.
    mesh_top_terms: Option<String>,
}

impl<'a> CsvRow<'a> {
    fn from_result(result: &'a ClassifiedRecord) -> Result<Self> {
        let decision = &result.decision;
        let scores = decision.scores.rounded();
        Ok(Self {
            record_id: &result.record_id,
            label: decision.label,
            reason: decision.reason,
            review_score: scores.review,
            non_review_score: scores.non_review,
            unknown_score: scores.unknown,
            margin: round_display(decision.margin),
            votes: decision.vote_count(),
            mesh_delta: decision.refinement.as_ref().map(|r| round_display(r.delta)),
            mesh_k_terms: decision.refinement.as_ref().map(|r| r.k_terms),
            evidence: serde_json::to_string(&decision.evidence)?,
            mesh_top_terms: decision
                .refinement
                .as_ref()
                .map(|r| serde_json::to_string(&r.top_terms))
                .transpose()?,
        })
    }
}

/// Write `results` to `path`, or to stdout when `path` is `None`.
pub fn write_results(path: Option<&Path>, format: OutputFormat, results: &[ClassifiedRecord]) -> Result<()> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create output {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let writer = BufWriter::new(sink);
    match format {
        OutputFormat::Csv => write_csv(writer, results),
        OutputFormat::Jsonl => write_jsonl(writer, results),
    }
    .context("failed to write classification results")
}

pub fn write_csv<W: Write>(writer: W, results: &[ClassifiedRecord]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for result in results {
        out.serialize(CsvRow::from_result(result)?)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_jsonl<W: Write>(mut writer: W, results: &[ClassifiedRecord]) -> Result<()> {
    for result in results {
        serde_json::to_writer(&mut writer, result)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Audit line: the raw input next to the decision made from it.
#[derive(Debug, Serialize)]
struct AuditEntry<'a> {
    record_id: &'a str,
    fields: &'a RawFieldSet,
    decision: &'a Decision,
}

/// Write one audit line per record. `records` and `results` are index-aligned.
pub fn write_audit_log(path: &Path, records: &[Record], results: &[ClassifiedRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create audit log {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for (record, result) in records.iter().zip(results) {
        let entry = AuditEntry {
            record_id: &result.record_id,
            fields: &record.fields,
            decision: &result.decision,
        };
        serde_json::to_writer(&mut writer, &entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), entries = results.len(), "audit log written");
    Ok(())
}
