use crate::transforms::Transform;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToLowerCase;

impl Transform for ToLowerCase {
    fn name(&self) -> &'static str {
        "ToLowerCase"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        sentence.to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToUpperCase;

impl Transform for ToUpperCase {
    fn name(&self) -> &'static str {
        "ToUpperCase"
    }

    fn process_sentence(&self, sentence: &str) -> String {
        sentence.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folding_is_unicode_aware() {
        assert_eq!(ToLowerCase.process_sentence("ÉCOLE Straße"), "école straße");
        assert_eq!(ToUpperCase.process_sentence("straße"), "STRASSE");
    }
}
