use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Ordered sentences, each an ordered sequence of word or character tokens.
pub type TokenizedCorpus = Vec<Vec<String>>;

/// Value threaded through a transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Sentence(String),
    Sentences(Vec<String>),
    Tokenized(TokenizedCorpus),
}

impl Text {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sentence(_) => "sentence",
            Self::Sentences(_) => "sentence list",
            Self::Tokenized(_) => "tokenized corpus",
        }
    }

    /// Unwraps the tokenized shape a metric computation needs.
    pub fn into_tokenized(self, stage: &'static str) -> Result<TokenizedCorpus, MetricsError> {
        match self {
            Self::Tokenized(corpus) => Ok(corpus),
            other => Err(MetricsError::invalid_input_kind(
                stage,
                "a tokenized corpus",
                other.kind(),
            )),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::Sentence(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::Sentence(value)
    }
}

impl From<Vec<String>> for Text {
    fn from(value: Vec<String>) -> Self {
        Self::Sentences(value)
    }
}

impl From<Vec<&str>> for Text {
    fn from(value: Vec<&str>) -> Self {
        Self::Sentences(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Text {
    fn from(value: &[&str]) -> Self {
        Self::Sentences(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for Text {
    fn from(value: &[String]) -> Self {
        Self::Sentences(value.to_vec())
    }
}

impl From<TokenizedCorpus> for Text {
    fn from(value: TokenizedCorpus) -> Self {
        Self::Tokenized(value)
    }
}

/// Token unit the default pipelines reduce sentences to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Word,
    #[serde(alias = "char")]
    Character,
}

impl Granularity {
    /// Key under which the headline error rate is reported.
    pub fn error_rate_metric(self) -> Metric {
        match self {
            Self::Word => Metric::Wer,
            Self::Character => Metric::Cer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Wer,
    Cer,
    Mer,
    Wil,
    Wip,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wer => "wer",
            Self::Cer => "cer",
            Self::Mer => "mer",
            Self::Wil => "wil",
            Self::Wip => "wip",
        }
    }
}
