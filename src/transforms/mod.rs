//! Composable text-normalization transforms.
//!
//! Every transform rewrites one sentence at a time; the collection-aware ones
//! (token reduction, sentence joining, empty-string filtering) override
//! [`Transform::process_sentences`] to act across elements.

use std::fmt;
use std::sync::Arc;

use crate::error::MetricsError;
use crate::types::Text;

mod case;
mod remove;
mod sentences;
mod substitute;
mod tokenize;

pub use case::{ToLowerCase, ToUpperCase};
pub use remove::{
    RemoveLiterals, RemoveMultipleSpaces, RemovePunctuation, RemoveWhiteSpace, Strip,
};
pub use sentences::{ReduceToSingleSentence, RemoveEmptyStrings};
pub use substitute::{
    ExpandCommonEnglishContractions, RemoveKaldiNonWords, RemoveSpecificWords, SubstituteRegexes,
    SubstituteWords,
};
pub use tokenize::{ReduceToListOfListOfChars, ReduceToListOfListOfWords};

pub trait Transform: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn process_sentence(&self, sentence: &str) -> String;

    /// Result for a bare string input.
    fn process_single(&self, sentence: String) -> Text {
        Text::Sentence(self.process_sentence(&sentence))
    }

    fn process_sentences(&self, sentences: Vec<String>) -> Text {
        Text::Sentences(
            sentences
                .iter()
                .map(|sentence| self.process_sentence(sentence))
                .collect(),
        )
    }

    fn apply(&self, input: Text) -> Result<Text, MetricsError> {
        match input {
            Text::Sentence(sentence) => Ok(self.process_single(sentence)),
            Text::Sentences(sentences) => Ok(self.process_sentences(sentences)),
            other @ Text::Tokenized(_) => Err(MetricsError::invalid_input_kind(
                self.name(),
                "a sentence or sentence list",
                other.kind(),
            )),
        }
    }
}

/// Ordered chain of transforms applied front to back.
#[derive(Debug, Clone, Default)]
pub struct Compose {
    transforms: Vec<Arc<dyn Transform>>,
}

impl Compose {
    pub fn new(transforms: Vec<Arc<dyn Transform>>) -> Self {
        Self { transforms }
    }

    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }

    /// Appends every transform of `other` after the ones already held.
    pub fn then(mut self, other: Compose) -> Self {
        self.transforms.extend(other.transforms);
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    pub fn apply(&self, input: impl Into<Text>) -> Result<Text, MetricsError> {
        self.transforms
            .iter()
            .try_fold(input.into(), |text, transform| transform.apply(text))
    }
}

impl FromIterator<Arc<dyn Transform>> for Compose {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Transform>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
