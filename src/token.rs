use serde::{Deserialize, Serialize};

/// Grammatical class assigned to a token by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenCategory {
    Pronoun,
    Verb,
    Article,
    Noun,
    Adjective,
    Preposition,
    Punctuation,
    Unknown,
}

impl TokenCategory {
    /// Categories backed by a dictionary section, in lexer priority order.
    pub const LEXICAL: [TokenCategory; 6] = [
        TokenCategory::Pronoun,
        TokenCategory::Verb,
        TokenCategory::Article,
        TokenCategory::Noun,
        TokenCategory::Adjective,
        TokenCategory::Preposition,
    ];

    /// Every category a token can carry.
    pub const ALL: [TokenCategory; 8] = [
        TokenCategory::Pronoun,
        TokenCategory::Verb,
        TokenCategory::Article,
        TokenCategory::Noun,
        TokenCategory::Adjective,
        TokenCategory::Preposition,
        TokenCategory::Punctuation,
        TokenCategory::Unknown,
    ];

    /// Name of the dictionary section holding words of this category.
    ///
    /// `Punctuation` and `Unknown` have no section and return `None`.
    pub fn section_name(&self) -> Option<&'static str> {
        match self {
            TokenCategory::Pronoun => Some("pronouns"),
            TokenCategory::Verb => Some("verbs"),
            TokenCategory::Article => Some("articles"),
            TokenCategory::Noun => Some("nouns"),
            TokenCategory::Adjective => Some("adjectives"),
            TokenCategory::Preposition => Some("prepositions"),
            TokenCategory::Punctuation | TokenCategory::Unknown => None,
        }
    }

    /// Inverse of [`TokenCategory::section_name`].
    pub fn from_section_name(name: &str) -> Option<Self> {
        Self::LEXICAL
            .into_iter()
            .find(|category| category.section_name() == Some(name))
    }

    pub fn is_punctuation(&self) -> bool {
        *self == TokenCategory::Punctuation
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenCategory::Pronoun => "PRONOUN",
            TokenCategory::Verb => "VERB",
            TokenCategory::Article => "ARTICLE",
            TokenCategory::Noun => "NOUN",
            TokenCategory::Adjective => "ADJECTIVE",
            TokenCategory::Preposition => "PREPOSITION",
            TokenCategory::Punctuation => "PUNCTUATION",
            TokenCategory::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

/// A classified unit of input text: one word or one punctuation mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercase surface form
    pub value: String,
    #[serde(rename = "type")]
    pub category: TokenCategory,
}

impl Token {
    pub fn new(value: impl Into<String>, category: TokenCategory) -> Self {
        Token {
            value: value.into(),
            category,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.category, self.value)
    }
}

/// A token after lexical substitution into the target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedToken {
    #[serde(rename = "original")]
    pub original_value: String,
    /// Empty when the token was elided; the slot is still kept.
    #[serde(rename = "translated")]
    pub translated_value: String,
    #[serde(rename = "type")]
    pub category: TokenCategory,
}

impl TranslatedToken {
    pub fn new(
        original_value: impl Into<String>,
        translated_value: impl Into<String>,
        category: TokenCategory,
    ) -> Self {
        TranslatedToken {
            original_value: original_value.into(),
            translated_value: translated_value.into(),
            category,
        }
    }

    pub fn is_elided(&self) -> bool {
        self.translated_value.is_empty()
    }
}
