use std::sync::OnceLock;

use regex::Regex;

use crate::transforms::Transform;

/// Removes every occurrence of each literal token, optionally leaving a space.
/// Empty tokens are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLiterals {
    tokens: Vec<String>,
    replacement: &'static str,
}

impl RemoveLiterals {
    pub fn new<I, S>(tokens: I, replace_by_space: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            replacement: if replace_by_space { " " } else { "" },
        }
    }
}

impl Transform for RemoveLiterals {
    fn name(&self) -> &'static str {
        "RemoveLiterals"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        self.tokens
            .iter()
            .filter(|token| !token.is_empty())
            .fold(sentence.to_string(), |s, token| {
                s.replace(token.as_str(), self.replacement)
            })
    }
}

/// Whitespace removed by [`RemoveWhiteSpace`]. Non-ASCII spaces such as
/// U+00A0 are left alone.
const ASCII_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Removes every ASCII whitespace character, or replaces each one by a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveWhiteSpace {
    literals: RemoveLiterals,
}

impl RemoveWhiteSpace {
    pub fn new(replace_by_space: bool) -> Self {
        Self {
            literals: RemoveLiterals::new(
                ASCII_WHITESPACE.iter().map(char::to_string),
                replace_by_space,
            ),
        }
    }
}

impl Default for RemoveWhiteSpace {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Transform for RemoveWhiteSpace {
    fn name(&self) -> &'static str {
        "RemoveWhiteSpace"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        self.literals.process_sentence(sentence)
    }
}

/// Removes every character in a Unicode punctuation category (`P*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovePunctuation;

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"\p{P}+").expect("punctuation class compiles"))
}

impl Transform for RemovePunctuation {
    fn name(&self) -> &'static str {
        "RemovePunctuation"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        punctuation().replace_all(sentence, "").into_owned()
    }
}

/// Collapses runs of two or more whitespace characters into a single space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveMultipleSpaces;

fn multiple_spaces() -> &'static Regex {
    static MULTIPLE_SPACES: OnceLock<Regex> = OnceLock::new();
    MULTIPLE_SPACES.get_or_init(|| Regex::new(r"\s\s+").expect("whitespace run compiles"))
}

impl Transform for RemoveMultipleSpaces {
    fn name(&self) -> &'static str {
        "RemoveMultipleSpaces"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        multiple_spaces().replace_all(sentence, " ").into_owned()
    }
}

/// Characters trimmed by [`Strip`]: Unicode whitespace plus the ASCII
/// information separators U+001C..=U+001F.
pub(crate) fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strip;

impl Transform for Strip {
    fn name(&self) -> &'static str {
        "Strip"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        sentence.trim_matches(is_strippable).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_removed_in_order() {
        let t = RemoveLiterals::new(["ab", "c"], false);
        assert_eq!(t.process_sentence("xabcy abab"), "xy ");
        let t = RemoveLiterals::new(["-"], true);
        assert_eq!(t.process_sentence("a-b"), "a b");
    }

    #[test]
    fn empty_literal_is_ignored() {
        let t = RemoveLiterals::new([""], true);
        assert_eq!(t.process_sentence("ab"), "ab");
    }

    #[test]
    fn whitespace_removed_or_replaced_char_by_char() {
        assert_eq!(RemoveWhiteSpace::new(false).process_sentence("a b\t\nc"), "abc");
        assert_eq!(RemoveWhiteSpace::new(true).process_sentence("a\t\tb"), "a  b");
        assert_eq!(RemoveWhiteSpace::new(true).process_sentence("a\x0bb\x0cc\rd"), "a b c d");
    }

    #[test]
    fn non_ascii_spaces_survive_whitespace_removal() {
        let t = RemoveWhiteSpace::new(false);
        assert_eq!(t.process_sentence("a\u{00a0}b"), "a\u{00a0}b");
        assert_eq!(
            t.process_sentence("a\u{00a0}b\u{2003}c d"),
            "a\u{00a0}b\u{2003}cd"
        );
    }

    #[test]
    fn strip_trims_information_separators() {
        assert_eq!(Strip.process_sentence("\x1cx\x1c"), "x");
        assert_eq!(Strip.process_sentence("\u{00a0} x\x1f\n"), "x");
        assert_eq!(Strip.process_sentence("a\x1db"), "a\x1db");
    }

    #[test]
    fn punctuation_covers_unicode_categories() {
        let t = RemovePunctuation;
        assert_eq!(t.process_sentence("Hello, world! ¿Qué?"), "Hello world Qué");
        assert_eq!(t.process_sentence("«quote» — dash"), "quote  dash");
        assert_eq!(t.process_sentence("it's"), "its");
        // Symbols (category S) are not punctuation.
        assert_eq!(t.process_sentence("1 + 1 = 2 $"), "1 + 1 = 2 $");
    }

    #[test]
    fn multiple_spaces_collapse_to_one() {
        assert_eq!(RemoveMultipleSpaces.process_sentence("a  b\t\tc d"), "a b c d");
        assert_eq!(RemoveMultipleSpaces.process_sentence("a\tb"), "a\tb");
    }

    #[test]
    fn strip_then_collapse_is_idempotent() {
        let once = |s: &str| RemoveMultipleSpaces.process_sentence(&Strip.process_sentence(s));
        for input in ["  a   b  ", "\t\tx\n\ny ", "", "plain"] {
            let first = once(input);
            assert_eq!(once(&first), first);
        }
    }
}
