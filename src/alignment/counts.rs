use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::alignment::levenshtein::{EditScript, EditTag};
use crate::error::MetricsError;

/// Operation counts summed over one or more aligned sentence pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AggregateCounts {
    pub hits: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl AggregateCounts {
    pub fn from_script(script: &EditScript) -> Self {
        let mut counts = Self::default();
        for run in &script.runs {
            let bucket = match run.tag {
                EditTag::Equal => &mut counts.hits,
                EditTag::Substitute => &mut counts.substitutions,
                EditTag::Delete => &mut counts.deletions,
                EditTag::Insert => &mut counts.insertions,
            };
            *bucket += run.len();
        }
        counts
    }

    /// Tokens on the reference side (H + S + D).
    pub fn reference_len(&self) -> usize {
        self.hits + self.substitutions + self.deletions
    }

    /// Tokens on the hypothesis side (H + S + I).
    pub fn hypothesis_len(&self) -> usize {
        self.hits + self.substitutions + self.insertions
    }

    pub fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// (S + D + I) / (H + S + D). Word error rate on word tokens, character
    /// error rate on character tokens. Can exceed 1.0.
    pub fn error_rate(&self) -> Result<f64, MetricsError> {
        let reference_len = self.reference_len();
        if reference_len == 0 {
            return Err(MetricsError::EmptyReference);
        }
        Ok(self.errors() as f64 / reference_len as f64)
    }

    /// (S + D + I) / (H + S + D + I), bounded to [0, 1].
    pub fn match_error_rate(&self) -> Result<f64, MetricsError> {
        if self.reference_len() == 0 {
            return Err(MetricsError::EmptyReference);
        }
        let total = self.hits + self.errors();
        Ok(self.errors() as f64 / total as f64)
    }

    /// (H / N_ref) * (H / N_hyp); zero when nothing was hit.
    pub fn word_information_preserved(&self) -> Result<f64, MetricsError> {
        if self.reference_len() == 0 {
            return Err(MetricsError::EmptyReference);
        }
        if self.hits == 0 {
            return Ok(0.0);
        }
        let hits = self.hits as f64;
        Ok((hits / self.reference_len() as f64) * (hits / self.hypothesis_len() as f64))
    }

    pub fn word_information_lost(&self) -> Result<f64, MetricsError> {
        Ok(1.0 - self.word_information_preserved()?)
    }
}

impl Add for AggregateCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            hits: self.hits + rhs.hits,
            substitutions: self.substitutions + rhs.substitutions,
            deletions: self.deletions + rhs.deletions,
            insertions: self.insertions + rhs.insertions,
        }
    }
}

impl AddAssign for AggregateCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for AggregateCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a AggregateCounts> for AggregateCounts {
    fn sum<I: Iterator<Item = &'a AggregateCounts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
