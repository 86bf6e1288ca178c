pub mod alignment;
pub mod config;
pub mod error;
pub mod measures;
pub mod pipeline;
pub mod transforms;
pub mod types;

pub use alignment::counts::AggregateCounts;
pub use alignment::levenshtein::{align_tokens, EditRun, EditScript, EditTag};
pub use alignment::report::{
    build_report, compute_sentence_report, Measures, Meta, RateBreakdown, Report, SentenceReport,
};
pub use alignment::SentenceAlignment;
pub use config::{MeasureConfig, TransformSpec};
pub use error::MetricsError;
pub use measures::{cer, cer_breakdown, compute_measures, mer, wer, wer_breakdown, wil, wip};
pub use pipeline::builder::MeasureBuilder;
pub use pipeline::runtime::Measurer;
pub use pipeline::traits::SequenceAligner;
pub use transforms::{Compose, Transform};
pub use types::{Granularity, Metric, Text, TokenizedCorpus};
