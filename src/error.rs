use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("{stage} expected {expected} but received a {found}")]
    InvalidInputKind {
        stage: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error(
        "truth and hypothesis differ in sentence count after normalization ({truth} vs {hypothesis})"
    )]
    SentenceCountMismatch { truth: usize, hypothesis: usize },
    #[error("reference contains no tokens after normalization")]
    EmptyReference,
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl MetricsError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub(crate) fn invalid_input_kind(
        stage: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidInputKind {
            stage,
            expected,
            found,
        }
    }
}
