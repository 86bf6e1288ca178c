use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::MetricsError;
use crate::transforms::{
    Compose, ExpandCommonEnglishContractions, ReduceToListOfListOfChars,
    ReduceToListOfListOfWords, ReduceToSingleSentence, RemoveEmptyStrings, RemoveKaldiNonWords,
    RemoveLiterals, RemoveMultipleSpaces, RemovePunctuation, RemoveSpecificWords,
    RemoveWhiteSpace, Strip, SubstituteRegexes, SubstituteWords, ToLowerCase, ToUpperCase,
    Transform,
};
use crate::types::Granularity;

/// Measurement settings read from a JSON file.
///
/// A missing transform list means "use the default pipeline for the
/// granularity".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasureConfig {
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub truth_transforms: Option<Vec<TransformSpec>>,
    #[serde(default)]
    pub hypothesis_transforms: Option<Vec<TransformSpec>>,
}

impl MeasureConfig {
    pub fn load(path: &Path) -> Result<Self, MetricsError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| MetricsError::io("read measure config", e))?;
        serde_json::from_str(&data).map_err(|e| MetricsError::json("parse measure config", e))
    }
}

/// Serialized form of one transform. Substitution tables are ordered pairs so
/// that application order survives the round trip through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformSpec {
    ReduceToListOfListOfWords {
        #[serde(default = "default_delimiter")]
        word_delimiter: String,
    },
    ReduceToListOfListOfChars,
    ReduceToSingleSentence {
        #[serde(default = "default_delimiter")]
        word_delimiter: String,
    },
    SubstituteRegexes {
        substitutions: Vec<(String, String)>,
    },
    SubstituteWords {
        substitutions: Vec<(String, String)>,
    },
    RemoveSpecificWords {
        words: Vec<String>,
    },
    RemoveLiterals {
        tokens: Vec<String>,
        #[serde(default)]
        replace_by_space: bool,
    },
    RemoveWhiteSpace {
        #[serde(default)]
        replace_by_space: bool,
    },
    RemovePunctuation,
    RemoveMultipleSpaces,
    Strip,
    RemoveEmptyStrings,
    ExpandCommonEnglishContractions,
    ToLowerCase,
    ToUpperCase,
    RemoveKaldiNonWords,
}

fn default_delimiter() -> String {
    ReduceToListOfListOfWords::DEFAULT_DELIMITER.to_string()
}

impl TransformSpec {
    pub fn build(&self) -> Result<Arc<dyn Transform>, MetricsError> {
        let transform: Arc<dyn Transform> = match self {
            Self::ReduceToListOfListOfWords { word_delimiter } => {
                Arc::new(ReduceToListOfListOfWords::new(word_delimiter.as_str()))
            }
            Self::ReduceToListOfListOfChars => Arc::new(ReduceToListOfListOfChars),
            Self::ReduceToSingleSentence { word_delimiter } => {
                Arc::new(ReduceToSingleSentence::new(word_delimiter.as_str()))
            }
            Self::SubstituteRegexes { substitutions } => Arc::new(SubstituteRegexes::new(
                substitutions.iter().map(|(p, r)| (p.as_str(), r.as_str())),
            )?),
            Self::SubstituteWords { substitutions } => Arc::new(SubstituteWords::new(
                substitutions.iter().map(|(w, r)| (w.as_str(), r.as_str())),
            )?),
            Self::RemoveSpecificWords { words } => Arc::new(RemoveSpecificWords::new(words)?),
            Self::RemoveLiterals {
                tokens,
                replace_by_space,
            } => Arc::new(RemoveLiterals::new(tokens.iter().cloned(), *replace_by_space)),
            Self::RemoveWhiteSpace { replace_by_space } => {
                Arc::new(RemoveWhiteSpace::new(*replace_by_space))
            }
            Self::RemovePunctuation => Arc::new(RemovePunctuation),
            Self::RemoveMultipleSpaces => Arc::new(RemoveMultipleSpaces),
            Self::Strip => Arc::new(Strip),
            Self::RemoveEmptyStrings => Arc::new(RemoveEmptyStrings),
            Self::ExpandCommonEnglishContractions => Arc::new(ExpandCommonEnglishContractions),
            Self::ToLowerCase => Arc::new(ToLowerCase),
            Self::ToUpperCase => Arc::new(ToUpperCase),
            Self::RemoveKaldiNonWords => Arc::new(RemoveKaldiNonWords),
        };
        Ok(transform)
    }
}

pub fn build_pipeline(specs: &[TransformSpec]) -> Result<Compose, MetricsError> {
    specs.iter().map(TransformSpec::build).collect()
}
