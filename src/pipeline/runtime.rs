use crate::alignment::counts::AggregateCounts;
use crate::alignment::report::{Measures, RateBreakdown};
use crate::alignment::SentenceAlignment;
use crate::error::MetricsError;
use crate::pipeline::traits::SequenceAligner;
use crate::transforms::Compose;
use crate::types::{Granularity, Text, TokenizedCorpus};

/// Normalizes truth/hypothesis pairs and scores them.
pub struct Measurer {
    granularity: Granularity,
    truth_transform: Compose,
    hypothesis_transform: Compose,
    sequence_aligner: Box<dyn SequenceAligner>,
}

pub(crate) struct MeasurerParts {
    pub granularity: Granularity,
    pub truth_transform: Compose,
    pub hypothesis_transform: Compose,
    pub sequence_aligner: Box<dyn SequenceAligner>,
}

impl Measurer {
    pub(crate) fn from_parts(parts: MeasurerParts) -> Self {
        Self {
            granularity: parts.granularity,
            truth_transform: parts.truth_transform,
            hypothesis_transform: parts.hypothesis_transform,
            sequence_aligner: parts.sequence_aligner,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn truth_transform(&self) -> &Compose {
        &self.truth_transform
    }

    pub fn hypothesis_transform(&self) -> &Compose {
        &self.hypothesis_transform
    }

    /// Runs both pipelines and checks the pair can be scored.
    ///
    /// Fails before any alignment work if the corpora differ in sentence
    /// count or the reference holds no tokens at all.
    pub fn normalize(
        &self,
        truth: impl Into<Text>,
        hypothesis: impl Into<Text>,
    ) -> Result<(TokenizedCorpus, TokenizedCorpus), MetricsError> {
        let truth = self
            .truth_transform
            .apply(truth)?
            .into_tokenized("truth pipeline")?;
        let hypothesis = self
            .hypothesis_transform
            .apply(hypothesis)?
            .into_tokenized("hypothesis pipeline")?;

        if truth.len() != hypothesis.len() {
            return Err(MetricsError::SentenceCountMismatch {
                truth: truth.len(),
                hypothesis: hypothesis.len(),
            });
        }

        let reference_tokens: usize = truth.iter().map(Vec::len).sum();
        if reference_tokens == 0 {
            return Err(MetricsError::EmptyReference);
        }

        let hypothesis_tokens: usize = hypothesis.iter().map(Vec::len).sum();
        if hypothesis_tokens == 0 {
            tracing::warn!(
                sentences = truth.len(),
                "hypothesis is empty after normalization; every reference token counts as a deletion"
            );
        }
        tracing::debug!(
            granularity = ?self.granularity,
            sentences = truth.len(),
            reference_tokens,
            hypothesis_tokens,
            "measurer: normalized corpus"
        );

        Ok((truth, hypothesis))
    }

    /// Aligns every sentence pair and keeps the edit scripts.
    pub fn align_corpus(
        &self,
        truth: impl Into<Text>,
        hypothesis: impl Into<Text>,
    ) -> Result<Vec<SentenceAlignment>, MetricsError> {
        let (truth, hypothesis) = self.normalize(truth, hypothesis)?;
        Ok(truth
            .into_iter()
            .zip(hypothesis)
            .map(|(reference, hypothesis)| {
                let script = self.sequence_aligner.align(&reference, &hypothesis);
                SentenceAlignment {
                    reference,
                    hypothesis,
                    script,
                }
            })
            .collect())
    }

    pub fn counts(
        &self,
        truth: impl Into<Text>,
        hypothesis: impl Into<Text>,
    ) -> Result<AggregateCounts, MetricsError> {
        let (truth, hypothesis) = self.normalize(truth, hypothesis)?;
        let counts: AggregateCounts = truth
            .iter()
            .zip(&hypothesis)
            .map(|(reference, hypothesis)| {
                AggregateCounts::from_script(&self.sequence_aligner.align(reference, hypothesis))
            })
            .sum();
        tracing::debug!(
            hits = counts.hits,
            substitutions = counts.substitutions,
            deletions = counts.deletions,
            insertions = counts.insertions,
            "measurer: aggregated counts"
        );
        Ok(counts)
    }

    pub fn measures(
        &self,
        truth: impl Into<Text>,
        hypothesis: impl Into<Text>,
    ) -> Result<Measures, MetricsError> {
        Measures::from_counts(self.granularity, self.counts(truth, hypothesis)?)
    }

    /// WER for word pipelines, CER for character pipelines.
    pub fn error_rate(
        &self,
        truth: impl Into<Text>,
        hypothesis: impl Into<Text>,
    ) -> Result<f64, MetricsError> {
        self.counts(truth, hypothesis)?.error_rate()
    }

    pub fn breakdown(
        &self,
        truth: impl Into<Text>,
        hypothesis: impl Into<Text>,
    ) -> Result<RateBreakdown, MetricsError> {
        let counts = self.counts(truth, hypothesis)?;
        Ok(RateBreakdown {
            metric: self.granularity.error_rate_metric(),
            rate: counts.error_rate()?,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::builder::MeasureBuilder;
    use crate::transforms::{ReduceToListOfListOfWords, ToLowerCase};

    fn word_measurer() -> Measurer {
        MeasureBuilder::new(Granularity::Word).build()
    }

    #[test]
    fn identical_input_has_zero_error() {
        let b = word_measurer()
            .breakdown("This is a test", "This is a test")
            .unwrap();
        assert_eq!(b.rate, 0.0);
        assert_eq!(
            (b.hits(), b.substitutions(), b.deletions(), b.insertions()),
            (4, 0, 0, 0)
        );
    }

    #[test]
    fn empty_hypothesis_counts_only_deletions() {
        let b = word_measurer().breakdown("This is a test", "").unwrap();
        assert_eq!(b.rate, 1.0);
        assert_eq!(b.deletions(), 4);
    }

    #[test]
    fn sentence_count_mismatch_fails_before_alignment() {
        let err = word_measurer()
            .counts(vec!["hello", "this", "sentence", "is fractured"], vec!["this sentence"])
            .unwrap_err();
        assert!(matches!(
            err,
            MetricsError::SentenceCountMismatch {
                truth: 4,
                hypothesis: 1
            }
        ));
    }

    #[test]
    fn empty_reference_fails() {
        let err = word_measurer().error_rate("", "test").unwrap_err();
        assert!(matches!(err, MetricsError::EmptyReference));
        let err = word_measurer()
            .error_rate(vec!["  ", ""], vec!["a", "b"])
            .unwrap_err();
        assert!(matches!(err, MetricsError::EmptyReference));
    }

    #[test]
    fn pipeline_must_end_tokenized() {
        let measurer = MeasureBuilder::new(Granularity::Word)
            .with_truth_transform(Compose::default().with(ToLowerCase))
            .build();
        let err = measurer.counts("a", "a").unwrap_err();
        assert!(matches!(
            err,
            MetricsError::InvalidInputKind {
                stage: "truth pipeline",
                found: "sentence",
                ..
            }
        ));
    }

    #[test]
    fn truth_and_hypothesis_pipelines_are_independent() {
        let measurer = MeasureBuilder::new(Granularity::Word)
            .with_hypothesis_transform(
                Compose::default()
                    .with(ToLowerCase)
                    .with(ReduceToListOfListOfWords::default()),
            )
            .build();
        // Truth keeps its case, so every word is a substitution.
        let b = measurer.breakdown("HELLO WORLD", "HELLO WORLD").unwrap();
        assert_eq!(b.substitutions(), 2);
    }

    #[test]
    fn align_corpus_keeps_pairs_in_order() {
        let alignments = word_measurer()
            .align_corpus(vec!["a b", "c"], vec!["a", "c d"])
            .unwrap();
        assert_eq!(alignments.len(), 2);
        assert_eq!(alignments[0].reference, ["a", "b"]);
        assert_eq!(alignments[1].hypothesis, ["c", "d"]);
        let total = crate::alignment::total_counts(&alignments);
        assert_eq!(total, word_measurer().counts(vec!["a b", "c"], vec!["a", "c d"]).unwrap());
    }

    #[test]
    fn measures_report_character_key_for_char_pipelines() {
        let m = MeasureBuilder::new(Granularity::Character)
            .build()
            .measures("ab", "ac")
            .unwrap();
        assert_eq!(m.breakdown().metric.as_str(), "cer");
        assert_eq!(m.error_rate, 0.5);
    }
}
