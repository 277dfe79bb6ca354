/// Errors raised while loading a dictionary. These are construction-time
/// failures: a pipeline is never built from a dictionary that failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary file or directory could not be read
    ReadError(String),
    /// The content is not valid JSON
    ParseError(String),
    /// Valid JSON that does not have the expected category → word map shape
    FormatError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::ReadError(msg) => write!(f, "Dictionary read error: {}", msg),
            DictionaryError::ParseError(msg) => write!(f, "Dictionary parse error: {}", msg),
            DictionaryError::FormatError(msg) => write!(f, "Dictionary format error: {}", msg),
        }
    }
}

impl std::error::Error for DictionaryError {}

pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Why a token sequence was rejected by the sentence matcher.
///
/// These never abort a translation; they end up as the `error` text of a
/// failed [`crate::TranslationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFailure {
    /// Nothing left once punctuation is filtered out
    NoTokens,
    /// The category sequence is not in the pattern whitelist
    UnrecognizedStructure,
}

impl std::fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchFailure::NoTokens => write!(f, "no tokens"),
            MatchFailure::UnrecognizedStructure => write!(f, "unrecognized sentence structure"),
        }
    }
}

impl std::error::Error for MatchFailure {}

impl serde::Serialize for MatchFailure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
