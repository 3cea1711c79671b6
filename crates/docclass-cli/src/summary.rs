//! End-of-run statistics.

use std::collections::BTreeMap;
use std::fmt;

use docclass_core::{Field, Label, ReasonCode, Record, Source};
use docclass_engine::ClassifiedRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub labels: BTreeMap<Label, usize>,
    /// Records with no publication type from each source.
    pub empty_publication_type: BTreeMap<Source, usize>,
    /// Records where nothing was recognized at all.
    pub zero_signal: usize,
}

impl RunSummary {
    pub fn collect(records: &[Record], results: &[ClassifiedRecord]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            *summary.labels.entry(result.decision.label).or_default() += 1;
            if matches!(
                result.decision.reason,
                ReasonCode::NoSignal | ReasonCode::NoVotes
            ) && result.decision.evidence.is_empty()
            {
                summary.zero_signal += 1;
            }
        }
        for source in Source::ALL {
            let empty = records
                .iter()
                .filter(|r| r.fields.get(source, Field::PublicationType).is_none())
                .count();
            summary.empty_publication_type.insert(source, empty);
        }
        summary
    }

    pub fn label_count(&self, label: Label) -> usize {
        self.labels.get(&label).copied().unwrap_or(0)
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }

    pub fn log(&self) {
        tracing::info!(
            total = self.total,
            review = self.label_count(Label::Review),
            non_review = self.label_count(Label::NonReview),
            experimental = self.label_count(Label::Experimental),
            unknown = self.label_count(Label::Unknown),
            zero_signal = self.zero_signal,
            "run summary"
        );
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {}", self.total)?;
        for (label, count) in &self.labels {
            writeln!(f, "  {:<13} {count:>8} ({:.1}%)", label.as_str(), self.percent(*count))?;
        }
        writeln!(f, "empty publication type:")?;
        for (source, count) in &self.empty_publication_type {
            writeln!(f, "  {:<13} {count:>8} ({:.1}%)", source.as_str(), self.percent(*count))?;
        }
        write!(
            f,
            "zero-signal records: {} ({:.1}%)",
            self.zero_signal,
            self.percent(self.zero_signal)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docclass_core::{Decision, RawFieldSet, ScoreVector};

    fn classified(id: &str, label: Label, reason: ReasonCode) -> ClassifiedRecord {
        ClassifiedRecord {
            record_id: id.to_string(),
            decision: Decision::new(label, reason, ScoreVector::default()),
        }
    }

    #[test]
    fn counts_labels_and_empty_fields() {
        let records = vec![
            Record::new(
                "a",
                RawFieldSet::new().with(Source::PubMed, Field::PublicationType, "Review"),
            ),
            Record::new("b", RawFieldSet::new()),
        ];
        let results = vec![
            classified("a", Label::Review, ReasonCode::ScoreThreshold),
            classified("b", Label::Unknown, ReasonCode::NoSignal),
        ];
        let summary = RunSummary::collect(&records, &results);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.label_count(Label::Review), 1);
        assert_eq!(summary.label_count(Label::NonReview), 0);
        assert_eq!(summary.zero_signal, 1);
        assert_eq!(summary.empty_publication_type[&Source::PubMed], 1);
        assert_eq!(summary.empty_publication_type[&Source::Crossref], 2);

        let text = summary.to_string();
        assert!(text.contains("records: 2"));
        assert!(text.contains("zero-signal records: 1 (50.0%)"));
    }

    #[test]
    fn empty_run_has_no_division_by_zero() {
        let summary = RunSummary::collect(&[], &[]);
        assert_eq!(summary.percent(0), 0.0);
        assert!(summary.to_string().contains("records: 0"));
    }
}
