//! Rule-based English to Spanish translation
//!
//! Translation works like a tiny compiler with three stages:
//!
//! 1. [`Lexer`] - splits the sentence into words and punctuation and tags each
//!    token with a grammatical category from the English dictionary.
//! 2. [`SentenceMatcher`] - accepts the sentence only if its category sequence
//!    is one of a fixed list of sentence patterns.
//! 3. [`Realizer`] - substitutes Spanish words, applies Spanish word order and
//!    agreement rules, and renders the sentence.
//!
//! # Example
//!
//! ```ignore
//! use smartlang::Translator;
//!
//! let translator = Translator::builtin()?;
//! let result = translator.translate("The small dog runs in the park.");
//! assert_eq!(result.translation.as_deref(), Some("el perro pequeño corre en el parque."));
//! ```

pub mod dictionary;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod nmt;
pub mod realizer;
pub mod token;
pub mod translator;


// Re-export main types for convenient access
pub use dictionary::{Dictionaries, Dictionary};
pub use error::{DictionaryError, DictionaryResult, MatchFailure};
pub use lexer::Lexer;
pub use matcher::{ACCEPTED_PATTERNS, Pattern, SentenceMatcher, SyntaxTree};
pub use realizer::{Realizer, TranslationResult};
pub use token::{Token, TokenCategory, TranslatedToken};
pub use translator::{Analysis, Translator};
