use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::error::MetricsError;
use crate::transforms::Transform;

/// Applies an ordered list of regex substitutions.
///
/// Replacements use `regex` syntax, so `$1` / `${name}` refer to capture
/// groups.
#[derive(Debug, Clone)]
pub struct SubstituteRegexes {
    substitutions: Vec<(Regex, String)>,
}

impl SubstituteRegexes {
    pub fn new<I, P, R>(substitutions: I) -> Result<Self, MetricsError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        let substitutions = substitutions
            .into_iter()
            .map(|(pattern, replacement)| {
                let pattern = pattern.as_ref();
                Regex::new(pattern)
                    .map(|re| (re, replacement.into()))
                    .map_err(|e| MetricsError::invalid_pattern(pattern, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { substitutions })
    }
}

impl Transform for SubstituteRegexes {
    fn name(&self) -> &'static str {
        "SubstituteRegexes"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        self.substitutions
            .iter()
            .fold(sentence.to_string(), |s, (re, replacement)| {
                re.replace_all(&s, replacement.as_str()).into_owned()
            })
    }
}

/// Replaces whole words only; replacements are inserted literally.
#[derive(Debug, Clone)]
pub struct SubstituteWords {
    substitutions: Vec<(Regex, String)>,
}

impl SubstituteWords {
    pub fn new<I, W, R>(substitutions: I) -> Result<Self, MetricsError>
    where
        I: IntoIterator<Item = (W, R)>,
        W: AsRef<str>,
        R: Into<String>,
    {
        let substitutions = substitutions
            .into_iter()
            .map(|(word, replacement)| {
                let pattern = format!(r"\b{}\b", regex::escape(word.as_ref()));
                Regex::new(&pattern)
                    .map(|re| (re, replacement.into()))
                    .map_err(|e| MetricsError::invalid_pattern(pattern, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { substitutions })
    }
}

impl Transform for SubstituteWords {
    fn name(&self) -> &'static str {
        "SubstituteWords"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        self.substitutions
            .iter()
            .fold(sentence.to_string(), |s, (re, replacement)| {
                re.replace_all(&s, NoExpand(replacement.as_str())).into_owned()
            })
    }
}

/// Replaces each listed whole word with a single space.
#[derive(Debug, Clone)]
pub struct RemoveSpecificWords {
    inner: SubstituteWords,
}

impl RemoveSpecificWords {
    pub fn new<I, W>(words: I) -> Result<Self, MetricsError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let inner = SubstituteWords::new(words.into_iter().map(|w| (w, " ")))?;
        Ok(Self { inner })
    }
}

impl Transform for RemoveSpecificWords {
    fn name(&self) -> &'static str {
        "RemoveSpecificWords"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        self.inner.process_sentence(sentence)
    }
}

/// Expands a fixed, non-exhaustive set of English contractions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandCommonEnglishContractions;

// Whole-word forms first, then generic endings; order matters ("won't" must
// not become "wo not").
const CONTRACTIONS: [(&str, &str); 11] = [
    ("won't", "will not"),
    ("can't", "can not"),
    ("let's", "let us"),
    ("n't", " not"),
    ("'re", " are"),
    ("'s", " is"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'t", " not"),
    ("'ve", " have"),
    ("'m", " am"),
];

impl Transform for ExpandCommonEnglishContractions {
    fn name(&self) -> &'static str {
        "ExpandCommonEnglishContractions"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        CONTRACTIONS
            .iter()
            .fold(sentence.to_string(), |s, &(from, to)| s.replace(from, to))
    }
}

/// Removes Kaldi-style non-word markers such as `<unk>` or `[noise]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveKaldiNonWords;

fn bracketed_token() -> &'static Regex {
    static BRACKETED: OnceLock<Regex> = OnceLock::new();
    BRACKETED.get_or_init(|| Regex::new(r"[<\[][^>\]]*[>\]]").expect("bracket pattern compiles"))
}

impl Transform for RemoveKaldiNonWords {
    fn name(&self) -> &'static str {
        "RemoveKaldiNonWords"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        bracketed_token().replace_all(sentence, "").into_owned()
    }
}
