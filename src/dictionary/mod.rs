//! Bilingual category dictionaries
//!
//! A [`Dictionary`] maps each lexical [`TokenCategory`] to a table of
//! source word → target word. The lexer only asks whether a word is present
//! in a section of the source dictionary; the realizer reads the target
//! dictionary for substitutions.
//!
//! Both dictionaries are loaded once and never change afterwards.

pub mod loader;

use std::collections::HashMap;
use std::path::Path;

use crate::error::DictionaryResult;
use crate::token::TokenCategory;

pub use loader::{load_dictionaries_from_dir, load_dictionary_from_file, parse_dictionary};

/// File name of the source (English) lexicon inside a data directory
pub const SOURCE_FILE_NAME: &str = "english_tokens.json";
/// File name of the target (Spanish) lexicon inside a data directory
pub const TARGET_FILE_NAME: &str = "spanish_tokens.json";

const BUILTIN_SOURCE: &str = include_str!("../../data/english_tokens.json");
const BUILTIN_TARGET: &str = include_str!("../../data/spanish_tokens.json");

/// Word tables keyed by grammatical category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(HashMap<TokenCategory, HashMap<String, String>>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(HashMap::new())
    }

    pub fn with_entry(
        &mut self,
        category: TokenCategory,
        word: &str,
        translation: &str,
    ) -> &mut Self {
        self.0
            .entry(category)
            .or_default()
            .insert(word.to_owned(), translation.to_owned());
        self
    }

    pub fn contains(&self, category: TokenCategory, word: &str) -> bool {
        self.0
            .get(&category)
            .is_some_and(|section| section.contains_key(word))
    }

    pub fn lookup(&self, category: TokenCategory, word: &str) -> Option<&str> {
        self.0
            .get(&category)
            .and_then(|section| section.get(word))
            .map(String::as_str)
    }

    pub fn section(&self, category: TokenCategory) -> Option<&HashMap<String, String>> {
        self.0.get(&category)
    }

    /// Total number of entries across all sections
    pub fn len(&self) -> usize {
        self.0.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The source/target dictionary pair a pipeline is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    pub source: Dictionary,
    pub target: Dictionary,
}

impl Dictionaries {
    pub fn new(source: Dictionary, target: Dictionary) -> Self {
        Dictionaries { source, target }
    }

    /// The English/Spanish lexicon compiled into the library.
    pub fn builtin() -> DictionaryResult<Self> {
        Ok(Dictionaries {
            source: parse_dictionary(BUILTIN_SOURCE, SOURCE_FILE_NAME)?,
            target: parse_dictionary(BUILTIN_TARGET, TARGET_FILE_NAME)?,
        })
    }

    /// Load `english_tokens.json` and `spanish_tokens.json` from `dir`.
    pub fn load_from_dir(dir: &Path) -> DictionaryResult<Self> {
        load_dictionaries_from_dir(dir)
    }
}
