use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::alignment::counts::AggregateCounts;
use crate::alignment::levenshtein::EditRun;
use crate::alignment::{total_counts, SentenceAlignment};
use crate::error::MetricsError;
use crate::types::{Granularity, Metric};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// A single rate plus the counts it was derived from.
///
/// Serializes as a flat map keyed by the metric name, e.g.
/// `{"wer": 0.5, "hits": 2, "substitutions": 0, "deletions": 2, "insertions": 0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBreakdown {
    pub metric: Metric,
    pub rate: f64,
    pub counts: AggregateCounts,
}

impl RateBreakdown {
    pub fn hits(&self) -> usize {
        self.counts.hits
    }

    pub fn substitutions(&self) -> usize {
        self.counts.substitutions
    }

    pub fn deletions(&self) -> usize {
        self.counts.deletions
    }

    pub fn insertions(&self) -> usize {
        self.counts.insertions
    }
}

impl Serialize for RateBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(self.metric.as_str(), &self.rate)?;
        serialize_counts(&mut map, &self.counts)?;
        map.end()
    }
}

/// Every rate derivable from one set of counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measures {
    /// `Wer` or `Cer` depending on token granularity.
    pub error_rate_metric: Metric,
    pub error_rate: f64,
    pub match_error_rate: f64,
    pub word_information_lost: f64,
    pub word_information_preserved: f64,
    pub counts: AggregateCounts,
}

impl Measures {
    pub fn from_counts(granularity: Granularity, counts: AggregateCounts) -> Result<Self, MetricsError> {
        Ok(Self {
            error_rate_metric: granularity.error_rate_metric(),
            error_rate: counts.error_rate()?,
            match_error_rate: counts.match_error_rate()?,
            word_information_lost: counts.word_information_lost()?,
            word_information_preserved: counts.word_information_preserved()?,
            counts,
        })
    }

    pub fn rate(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Wer | Metric::Cer => self.error_rate,
            Metric::Mer => self.match_error_rate,
            Metric::Wil => self.word_information_lost,
            Metric::Wip => self.word_information_preserved,
        }
    }

    pub fn breakdown(&self) -> RateBreakdown {
        RateBreakdown {
            metric: self.error_rate_metric,
            rate: self.error_rate,
            counts: self.counts,
        }
    }
}

impl Serialize for Measures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        map.serialize_entry(self.error_rate_metric.as_str(), &self.error_rate)?;
        map.serialize_entry(Metric::Mer.as_str(), &self.match_error_rate)?;
        map.serialize_entry(Metric::Wil.as_str(), &self.word_information_lost)?;
        map.serialize_entry(Metric::Wip.as_str(), &self.word_information_preserved)?;
        serialize_counts(&mut map, &self.counts)?;
        map.end()
    }
}

fn serialize_counts<M: SerializeMap>(map: &mut M, counts: &AggregateCounts) -> Result<(), M::Error> {
    map.serialize_entry("hits", &counts.hits)?;
    map.serialize_entry("substitutions", &counts.substitutions)?;
    map.serialize_entry("deletions", &counts.deletions)?;
    map.serialize_entry("insertions", &counts.insertions)
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub sentences: Vec<SentenceReport>,
    pub aggregates: Measures,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub granularity: Granularity,
    pub truth_pipeline: Vec<String>,
    pub hypothesis_pipeline: Vec<String>,
    pub sentence_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    pub index: usize,
    pub reference: Vec<String>,
    pub hypothesis: Vec<String>,
    #[serde(flatten)]
    pub counts: AggregateCounts,
    /// `None` for sentences whose reference side is empty.
    pub error_rate: Option<f64>,
    pub edits: Vec<EditRun>,
}

pub fn compute_sentence_report(index: usize, alignment: &SentenceAlignment) -> SentenceReport {
    let counts = alignment.counts();
    SentenceReport {
        index,
        reference: alignment.reference.clone(),
        hypothesis: alignment.hypothesis.clone(),
        counts,
        error_rate: counts.error_rate().ok(),
        edits: alignment.script.runs.clone(),
    }
}

pub fn build_report(
    meta: Meta,
    alignments: &[SentenceAlignment],
) -> Result<Report, MetricsError> {
    let aggregates = Measures::from_counts(meta.granularity, total_counts(alignments))?;
    let sentences = alignments
        .iter()
        .enumerate()
        .map(|(index, alignment)| compute_sentence_report(index, alignment))
        .collect();
    Ok(Report {
        schema_version: REPORT_SCHEMA_VERSION,
        meta,
        sentences,
        aggregates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::levenshtein::align_tokens;

    fn pair(reference: &[&str], hypothesis: &[&str]) -> SentenceAlignment {
        let reference: Vec<String> = reference.iter().map(|s| s.to_string()).collect();
        let hypothesis: Vec<String> = hypothesis.iter().map(|s| s.to_string()).collect();
        let script = align_tokens(&reference[..], &hypothesis[..]);
        SentenceAlignment {
            reference,
            hypothesis,
            script,
        }
    }

    fn meta(granularity: Granularity, sentence_count: usize) -> Meta {
        Meta {
            generated_at: "2024-01-01T00:00:00Z".to_string(),
            granularity,
            truth_pipeline: vec!["Strip".to_string()],
            hypothesis_pipeline: vec!["Strip".to_string()],
            sentence_count,
        }
    }

    #[test]
    fn breakdown_serializes_rate_under_metric_key() {
        let counts = AggregateCounts {
            hits: 6,
            substitutions: 1,
            deletions: 3,
            insertions: 3,
        };
        let breakdown = RateBreakdown {
            metric: Metric::Cer,
            rate: 0.7,
            counts,
        };
        let value = serde_json::to_value(breakdown).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "cer": 0.7,
                "hits": 6,
                "substitutions": 1,
                "deletions": 3,
                "insertions": 3
            })
        );
    }

    #[test]
    fn measures_expose_every_rate() {
        let counts = AggregateCounts {
            hits: 2,
            substitutions: 1,
            deletions: 1,
            insertions: 1,
        };
        let measures = Measures::from_counts(Granularity::Word, counts).unwrap();
        assert!((measures.rate(Metric::Wer) - 0.75).abs() < 1e-12);
        assert!((measures.rate(Metric::Mer) - 0.6).abs() < 1e-12);
        assert!((measures.rate(Metric::Wip) - 0.25).abs() < 1e-12);
        assert!((measures.rate(Metric::Wil) - 0.75).abs() < 1e-12);
        let value = serde_json::to_value(measures).unwrap();
        assert_eq!(value["wer"], serde_json::json!(0.75));
        assert_eq!(value["insertions"], serde_json::json!(1));
        assert!(value.get("cer").is_none());
    }

    #[test]
    fn report_aggregates_all_sentences() {
        let alignments = vec![
            pair(&["this", "is", "a", "test"], &["this", "test"]),
            pair(&[], &["extra"]),
        ];
        let report = build_report(meta(Granularity::Word, 2), &alignments).unwrap();
        assert_eq!(report.schema_version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.sentences.len(), 2);
        assert_eq!(report.sentences[0].error_rate, Some(0.5));
        assert_eq!(report.sentences[1].error_rate, None);
        assert_eq!(report.aggregates.counts.deletions, 2);
        assert_eq!(report.aggregates.counts.insertions, 1);
        assert!((report.aggregates.error_rate - 0.75).abs() < 1e-12);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["sentences"][0]["hits"], serde_json::json!(2));
        assert_eq!(value["sentences"][0]["edits"][1]["tag"], serde_json::json!("delete"));
        assert_eq!(value["meta"]["granularity"], serde_json::json!("word"));
    }

    #[test]
    fn report_fails_on_empty_reference() {
        let alignments = vec![pair(&[], &["a"])];
        let err = build_report(meta(Granularity::Character, 1), &alignments).unwrap_err();
        assert!(matches!(err, MetricsError::EmptyReference));
    }
}
