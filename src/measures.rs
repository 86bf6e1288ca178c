//! One-call metrics over the default pipelines.
//!
//! Each function accepts a single sentence or a list of sentences on either
//! side. Truth and hypothesis must normalize to the same number of sentences.

use std::sync::OnceLock;

use crate::alignment::report::{Measures, RateBreakdown};
use crate::error::MetricsError;
use crate::pipeline::builder::MeasureBuilder;
use crate::pipeline::runtime::Measurer;
use crate::types::{Granularity, Text};

fn word_measurer() -> &'static Measurer {
    static WORD: OnceLock<Measurer> = OnceLock::new();
    WORD.get_or_init(|| MeasureBuilder::new(Granularity::Word).build())
}

fn char_measurer() -> &'static Measurer {
    static CHAR: OnceLock<Measurer> = OnceLock::new();
    CHAR.get_or_init(|| MeasureBuilder::new(Granularity::Character).build())
}

/// All word-level measures at once; a single alignment pass.
pub fn compute_measures(
    truth: impl Into<Text>,
    hypothesis: impl Into<Text>,
) -> Result<Measures, MetricsError> {
    word_measurer().measures(truth, hypothesis)
}

/// Word error rate.
pub fn wer(truth: impl Into<Text>, hypothesis: impl Into<Text>) -> Result<f64, MetricsError> {
    word_measurer().error_rate(truth, hypothesis)
}

pub fn wer_breakdown(
    truth: impl Into<Text>,
    hypothesis: impl Into<Text>,
) -> Result<RateBreakdown, MetricsError> {
    word_measurer().breakdown(truth, hypothesis)
}

/// Match error rate.
pub fn mer(truth: impl Into<Text>, hypothesis: impl Into<Text>) -> Result<f64, MetricsError> {
    Ok(compute_measures(truth, hypothesis)?.match_error_rate)
}

/// Word information lost.
pub fn wil(truth: impl Into<Text>, hypothesis: impl Into<Text>) -> Result<f64, MetricsError> {
    Ok(compute_measures(truth, hypothesis)?.word_information_lost)
}

/// Word information preserved.
pub fn wip(truth: impl Into<Text>, hypothesis: impl Into<Text>) -> Result<f64, MetricsError> {
    Ok(compute_measures(truth, hypothesis)?.word_information_preserved)
}

/// Character error rate. Spaces count as characters.
pub fn cer(truth: impl Into<Text>, hypothesis: impl Into<Text>) -> Result<f64, MetricsError> {
    char_measurer().error_rate(truth, hypothesis)
}

pub fn cer_breakdown(
    truth: impl Into<Text>,
    hypothesis: impl Into<Text>,
) -> Result<RateBreakdown, MetricsError> {
    char_measurer().breakdown(truth, hypothesis)
}
