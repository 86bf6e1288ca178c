use crate::config::{build_pipeline, MeasureConfig};
use crate::error::MetricsError;
use crate::pipeline::defaults::{default_pipeline, LevenshteinAligner};
use crate::pipeline::runtime::{Measurer, MeasurerParts};
use crate::pipeline::traits::SequenceAligner;
use crate::transforms::Compose;
use crate::types::Granularity;

pub struct MeasureBuilder {
    granularity: Granularity,
    truth_transform: Option<Compose>,
    hypothesis_transform: Option<Compose>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
}

impl MeasureBuilder {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            truth_transform: None,
            hypothesis_transform: None,
            sequence_aligner: None,
        }
    }

    pub fn from_config(config: &MeasureConfig) -> Result<Self, MetricsError> {
        let mut builder = Self::new(config.granularity);
        if let Some(specs) = &config.truth_transforms {
            builder.truth_transform = Some(build_pipeline(specs)?);
        }
        if let Some(specs) = &config.hypothesis_transforms {
            builder.hypothesis_transform = Some(build_pipeline(specs)?);
        }
        Ok(builder)
    }

    pub fn with_truth_transform(mut self, transform: Compose) -> Self {
        self.truth_transform = Some(transform);
        self
    }

    pub fn with_hypothesis_transform(mut self, transform: Compose) -> Self {
        self.hypothesis_transform = Some(transform);
        self
    }

    /// Uses the same pipeline for truth and hypothesis.
    pub fn with_transform(self, transform: Compose) -> Self {
        self.with_truth_transform(transform.clone())
            .with_hypothesis_transform(transform)
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn build(self) -> Measurer {
        let granularity = self.granularity;
        let truth_transform = self
            .truth_transform
            .unwrap_or_else(|| default_pipeline(granularity));
        let hypothesis_transform = self
            .hypothesis_transform
            .unwrap_or_else(|| default_pipeline(granularity));
        tracing::debug!(
            ?granularity,
            truth_pipeline = ?truth_transform.names(),
            hypothesis_pipeline = ?hypothesis_transform.names(),
            "measurer: built"
        );

        Measurer::from_parts(MeasurerParts {
            granularity,
            truth_transform,
            hypothesis_transform,
            sequence_aligner: self
                .sequence_aligner
                .unwrap_or_else(|| Box::new(LevenshteinAligner)),
        })
    }
}
