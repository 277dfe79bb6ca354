use regex::Regex;
use tracing::trace;

use crate::dictionary::Dictionary;
use crate::token::{Token, TokenCategory};

/// Characters classified as punctuation
pub const PUNCTUATION: &[char] = &['.', ',', ';', ':', '?', '!'];

/// Splits English text into classified tokens.
///
/// Words are classified against the source dictionary in a fixed priority
/// order (pronoun, verb, article, noun, adjective, preposition), so a word
/// listed in two sections takes the earlier one. Purely alphabetic words
/// missing from every section are treated as nouns, which lets proper names
/// take part in sentence patterns. Anything else that is not punctuation is
/// `Unknown`.
#[derive(Debug, Clone)]
pub struct Lexer {
    dictionary: Dictionary,
    splitter: Regex,
}

impl Lexer {
    pub fn new(dictionary: Dictionary) -> Self {
        Lexer {
            dictionary,
            // A run of word characters, or any single other non-space character
            splitter: Regex::new(r"\w+|\S").expect("token pattern is valid"),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let cleaned = text.trim().to_lowercase();
        let tokens: Vec<Token> = self
            .splitter
            .find_iter(&cleaned)
            .map(|raw| Token::new(raw.as_str(), self.classify(raw.as_str())))
            .collect();
        trace!("Tokenized {:?} into {} tokens", text, tokens.len());
        tokens
    }

    fn classify(&self, word: &str) -> TokenCategory {
        if let Some(category) = TokenCategory::LEXICAL
            .into_iter()
            .find(|category| self.dictionary.contains(*category, word))
        {
            return category;
        }

        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if PUNCTUATION.contains(&c) {
                return TokenCategory::Punctuation;
            }
        }

        if word.chars().all(char::is_alphabetic) {
            TokenCategory::Noun
        } else {
            TokenCategory::Unknown
        }
    }
}
