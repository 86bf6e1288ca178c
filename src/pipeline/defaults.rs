use crate::alignment::levenshtein::{align_tokens, EditScript};
use crate::pipeline::traits::SequenceAligner;
use crate::transforms::{
    Compose, ReduceToListOfListOfChars, ReduceToListOfListOfWords, RemoveMultipleSpaces, Strip,
};
use crate::types::Granularity;

pub struct LevenshteinAligner;

impl SequenceAligner for LevenshteinAligner {
    fn align(&self, reference: &[String], hypothesis: &[String]) -> EditScript {
        align_tokens(reference, hypothesis)
    }
}

/// Strip, collapse repeated whitespace, then split into words.
pub fn default_word_pipeline() -> Compose {
    Compose::default()
        .with(Strip)
        .with(RemoveMultipleSpaces)
        .with(ReduceToListOfListOfWords::default())
}

/// Strip, collapse repeated whitespace, then split into characters.
pub fn default_char_pipeline() -> Compose {
    Compose::default()
        .with(Strip)
        .with(RemoveMultipleSpaces)
        .with(ReduceToListOfListOfChars)
}

pub fn default_pipeline(granularity: Granularity) -> Compose {
    match granularity {
        Granularity::Word => default_word_pipeline(),
        Granularity::Character => default_char_pipeline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Text;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn levenshtein_aligner_matches_free_function() {
        let reference = owned(&["a", "b"]);
        let hypothesis = owned(&["a", "c", "d"]);
        let script = LevenshteinAligner.align(&reference, &hypothesis);
        assert_eq!(script, align_tokens(&reference[..], &hypothesis[..]));
    }

    #[test]
    fn word_pipeline_normalizes_spacing() {
        let out = default_word_pipeline().apply("  This  is   a test ").unwrap();
        assert_eq!(out, Text::Tokenized(vec![owned(&["This", "is", "a", "test"])]));
    }

    #[test]
    fn char_pipeline_keeps_single_spaces() {
        let out = default_char_pipeline().apply(" a  b ").unwrap();
        assert_eq!(out, Text::Tokenized(vec![owned(&["a", " ", "b"])]));
    }

    #[test]
    fn default_pipeline_follows_granularity() {
        assert_eq!(
            default_pipeline(Granularity::Word).names(),
            default_word_pipeline().names()
        );
        assert_eq!(
            default_pipeline(Granularity::Character).names(),
            ["Strip", "RemoveMultipleSpaces", "ReduceToListOfListOfChars"]
        );
    }
}
