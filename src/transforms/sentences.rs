use crate::transforms::remove::is_strippable;
use crate::transforms::Transform;
use crate::types::Text;

/// Joins all non-empty sentences into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceToSingleSentence {
    word_delimiter: String,
}

impl ReduceToSingleSentence {
    pub fn new(word_delimiter: impl Into<String>) -> Self {
        Self {
            word_delimiter: word_delimiter.into(),
        }
    }
}

impl Default for ReduceToSingleSentence {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl Transform for ReduceToSingleSentence {
    fn name(&self) -> &'static str {
        "ReduceToSingleSentence"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        sentence.to_string()
    }

    fn process_sentences(&self, sentences: Vec<String>) -> Text {
        let kept: Vec<String> = sentences.into_iter().filter(|s| !s.is_empty()).collect();
        if kept.is_empty() {
            return Text::Sentences(Vec::new());
        }
        Text::Sentences(vec![kept.join(&self.word_delimiter)])
    }
}

/// Drops sentences that are empty once surrounding whitespace is trimmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveEmptyStrings;

impl Transform for RemoveEmptyStrings {
    fn name(&self) -> &'static str {
        "RemoveEmptyStrings"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        sentence.trim_matches(is_strippable).to_string()
    }

    fn process_sentences(&self, sentences: Vec<String>) -> Text {
        Text::Sentences(
            sentences
                .into_iter()
                .filter(|s| !s.trim_matches(is_strippable).is_empty())
                .collect(),
        )
    }
}
