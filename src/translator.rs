use serde::Serialize;
use tracing::debug;

use crate::dictionary::Dictionaries;
use crate::error::DictionaryResult;
use crate::lexer::Lexer;
use crate::matcher::{SentenceMatcher, SyntaxTree};
use crate::realizer::{Realizer, TranslationResult};
use crate::token::Token;

/// The rule-based English → Spanish pipeline: lexer, sentence matcher and
/// realizer composed in that order.
///
/// Build it once and share it; `translate` takes `&self` and keeps no state
/// between calls.
#[derive(Debug, Clone)]
pub struct Translator {
    lexer: Lexer,
    matcher: SentenceMatcher,
    realizer: Realizer,
}

/// Every intermediate stage of one translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub tree: SyntaxTree,
    pub result: TranslationResult,
}

impl Translator {
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self::with_matcher(dictionaries, SentenceMatcher::new())
    }

    pub fn with_matcher(dictionaries: Dictionaries, matcher: SentenceMatcher) -> Self {
        Translator {
            lexer: Lexer::new(dictionaries.source),
            matcher,
            realizer: Realizer::new(dictionaries.target),
        }
    }

    /// A translator over the lexicon compiled into the library
    pub fn builtin() -> DictionaryResult<Self> {
        Ok(Self::new(Dictionaries::builtin()?))
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn matcher(&self) -> &SentenceMatcher {
        &self.matcher
    }

    pub fn realizer(&self) -> &Realizer {
        &self.realizer
    }

    pub fn translate(&self, text: &str) -> TranslationResult {
        self.analyze(text).result
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.lexer.tokenize(text);
        let tree = self.matcher.match_sentence(tokens.clone());
        let result = self.realizer.generate(&tree);
        debug!(
            "Translated {:?}: success={} translation={:?}",
            text, result.success, result.translation
        );
        Analysis {
            tokens,
            tree,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenCategory;

    fn translator() -> Translator {
        Translator::builtin().unwrap()
    }

    #[test]
    fn test_i_am_happy() {
        let result = translator().translate("I am happy");
        assert!(result.success);
        assert_eq!(result.translation.as_deref(), Some("estoy feliz"));
        assert_eq!(result.error, None);
        assert_eq!(result.tokens.len(), 3);
        assert_eq!(result.tokens[0].translated_value, "");
    }

    #[test]
    fn test_single_noun_is_rejected() {
        let result = translator().translate("Table");
        assert!(!result.success);
        assert_eq!(result.translation, None);
        assert_eq!(
            result.error.as_deref(),
            Some("unrecognized sentence structure")
        );
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "?!"] {
            let result = translator().translate(input);
            assert!(!result.success);
            assert_eq!(result.error.as_deref(), Some("no tokens"));
        }
    }

    #[test]
    fn test_translation_is_idempotent() {
        let translator = translator();
        let first = translator.translate("The small dog runs in the park.");
        let second = translator.translate("The small dog runs in the park.");
        assert_eq!(first, second);
        assert_eq!(
            first.translation.as_deref(),
            Some("el perro pequeño corre en el parque.")
        );
    }

    #[test]
    fn test_analyze_exposes_stages() {
        let analysis = translator().analyze("The cat is on the table.");
        assert_eq!(analysis.tokens.len(), 7);
        assert!(analysis.tree.valid);
        assert_eq!(
            analysis.tree.pattern,
            vec![
                TokenCategory::Article,
                TokenCategory::Noun,
                TokenCategory::Verb,
                TokenCategory::Preposition,
                TokenCategory::Article,
                TokenCategory::Noun,
            ]
        );
        assert_eq!(
            analysis.result.translation.as_deref(),
            Some("el gato está sobre la mesa.")
        );
    }

    #[test]
    fn test_custom_matcher() {
        let matcher = SentenceMatcher::with_patterns(vec![vec![TokenCategory::Noun]]);
        let translator = Translator::with_matcher(Dictionaries::builtin().unwrap(), matcher);
        let result = translator.translate("table");
        assert_eq!(result.translation.as_deref(), Some("mesa"));
        assert!(!translator.translate("I am happy").success);
    }

    #[test]
    fn test_translator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
