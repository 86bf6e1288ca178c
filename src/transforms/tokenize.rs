use crate::transforms::Transform;
use crate::types::{Text, TokenizedCorpus};

/// Splits every sentence into words on a delimiter, dropping empty tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceToListOfListOfWords {
    word_delimiter: String,
}

impl ReduceToListOfListOfWords {
    pub const DEFAULT_DELIMITER: &'static str = " ";

    pub fn new(word_delimiter: impl Into<String>) -> Self {
        Self {
            word_delimiter: word_delimiter.into(),
        }
    }

    pub fn tokens(&self, sentence: &str) -> Vec<String> {
        sentence
            .split(self.word_delimiter.as_str())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for ReduceToListOfListOfWords {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELIMITER)
    }
}

impl Transform for ReduceToListOfListOfWords {
    fn name(&self) -> &'static str {
        "ReduceToListOfListOfWords"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        self.tokens(sentence).join(&self.word_delimiter)
    }

    fn process_single(&self, sentence: String) -> Text {
        Text::Tokenized(vec![self.tokens(&sentence)])
    }

    fn process_sentences(&self, sentences: Vec<String>) -> Text {
        Text::Tokenized(collect_sentences(&sentences, |s| self.tokens(s)))
    }
}

/// Splits every sentence into one token per character, whitespace included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceToListOfListOfChars;

impl ReduceToListOfListOfChars {
    pub fn tokens(&self, sentence: &str) -> Vec<String> {
        sentence.chars().map(String::from).collect()
    }
}

impl Transform for ReduceToListOfListOfChars {
    fn name(&self) -> &'static str {
        "ReduceToListOfListOfChars"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        sentence.to_string()
    }

    fn process_single(&self, sentence: String) -> Text {
        Text::Tokenized(vec![self.tokens(&sentence)])
    }

    fn process_sentences(&self, sentences: Vec<String>) -> Text {
        Text::Tokenized(collect_sentences(&sentences, |s| self.tokens(s)))
    }
}

// An empty collection still yields one (empty) sentence so that truth and
// hypothesis keep a pairable shape.
fn collect_sentences(
    sentences: &[String],
    tokenize: impl Fn(&str) -> Vec<String>,
) -> TokenizedCorpus {
    if sentences.is_empty() {
        return vec![Vec::new()];
    }
    sentences.iter().map(|s| tokenize(s)).collect()
}
