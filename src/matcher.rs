//! Sentence structure validation
//!
//! The grammar is a whitelist: a sentence is accepted only if its sequence of
//! token categories (punctuation removed) is exactly one of the declared
//! patterns. There is no phrase structure and no partial matching.

use serde::Serialize;
use tracing::debug;

use crate::error::MatchFailure;
use crate::token::{Token, TokenCategory};

use TokenCategory::{Adjective, Article, Noun, Preposition, Pronoun, Verb};

/// An accepted sentence shape
pub type Pattern = Vec<TokenCategory>;

/// Accepted sentence shapes, checked in declaration order.
pub const ACCEPTED_PATTERNS: &[&[TokenCategory]] = &[
    // hello
    &[Pronoun],
    // hello maria
    &[Pronoun, Noun],
    // i run
    &[Pronoun, Verb],
    // i am happy
    &[Pronoun, Verb, Adjective],
    // i love maria
    &[Pronoun, Verb, Noun],
    // i have a house
    &[Pronoun, Verb, Article, Noun],
    // she has a red car
    &[Pronoun, Verb, Article, Adjective, Noun],
    // i love my family
    &[Pronoun, Verb, Pronoun, Noun],
    // he loves his new car
    &[Pronoun, Verb, Pronoun, Adjective, Noun],
    // he loves his new blue car
    &[Pronoun, Verb, Pronoun, Adjective, Adjective, Noun],
    // we live in the city
    &[Pronoun, Verb, Preposition, Article, Noun],
    // i see the cat on the table
    &[Pronoun, Verb, Article, Noun, Preposition, Article, Noun],
    // the dog runs
    &[Article, Noun, Verb],
    // the house is big
    &[Article, Noun, Verb, Adjective],
    // the small dog runs
    &[Article, Adjective, Noun, Verb],
    // the old house is beautiful
    &[Article, Adjective, Noun, Verb, Adjective],
    // the cat is on the table
    &[Article, Noun, Verb, Preposition, Article, Noun],
    // the small dog runs in the park
    &[Article, Adjective, Noun, Verb, Preposition, Article, Noun],
    // maria is happy
    &[Noun, Verb, Adjective],
    // maria has a dog
    &[Noun, Verb, Article, Noun],
];

/// Result of matching a token sequence against the pattern whitelist.
///
/// `tokens` always carries the full input, punctuation included, so the
/// realizer can reproduce it. `pattern` is empty when the tree is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxTree {
    pub valid: bool,
    pub pattern: Pattern,
    pub tokens: Vec<Token>,
    pub failure_reason: Option<MatchFailure>,
}

impl SyntaxTree {
    pub fn matched(pattern: Pattern, tokens: Vec<Token>) -> Self {
        SyntaxTree {
            valid: true,
            pattern,
            tokens,
            failure_reason: None,
        }
    }

    pub fn rejected(tokens: Vec<Token>, reason: MatchFailure) -> Self {
        SyntaxTree {
            valid: false,
            pattern: Vec::new(),
            tokens,
            failure_reason: Some(reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentenceMatcher {
    patterns: Vec<Pattern>,
}

impl SentenceMatcher {
    /// A matcher over [`ACCEPTED_PATTERNS`]
    pub fn new() -> Self {
        Self::with_patterns(ACCEPTED_PATTERNS.iter().map(|p| p.to_vec()).collect())
    }

    pub fn with_patterns(patterns: Vec<Pattern>) -> Self {
        SentenceMatcher { patterns }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn match_sentence(&self, tokens: Vec<Token>) -> SyntaxTree {
        let shape: Vec<TokenCategory> = tokens
            .iter()
            .map(|token| token.category)
            .filter(|category| !category.is_punctuation())
            .collect();

        if shape.is_empty() {
            return SyntaxTree::rejected(tokens, MatchFailure::NoTokens);
        }

        match self
            .patterns
            .iter()
            .enumerate()
            .find(|(_, pattern)| pattern.as_slice() == shape.as_slice())
        {
            Some((index, pattern)) => {
                debug!("Matched pattern #{} {:?}", index + 1, pattern);
                SyntaxTree::matched(pattern.clone(), tokens)
            }
            None => {
                debug!("No pattern for {:?}", shape);
                SyntaxTree::rejected(tokens, MatchFailure::UnrecognizedStructure)
            }
        }
    }
}

impl Default for SentenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenCategory::Punctuation;

    fn synthetic(categories: &[TokenCategory]) -> Vec<Token> {
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| Token::new(format!("w{}", i), *category))
            .collect()
    }

    #[test]
    fn test_every_declared_pattern_is_accepted() {
        let matcher = SentenceMatcher::new();
        for pattern in ACCEPTED_PATTERNS {
            let tree = matcher.match_sentence(synthetic(pattern));
            assert!(tree.valid, "pattern {:?} rejected", pattern);
            assert_eq!(tree.pattern.as_slice(), *pattern);
            assert_eq!(tree.failure_reason, None);
        }
    }

    #[test]
    fn test_patterns_are_unique() {
        for (i, a) in ACCEPTED_PATTERNS.iter().enumerate() {
            for b in &ACCEPTED_PATTERNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unlisted_shapes_are_rejected() {
        let matcher = SentenceMatcher::new();
        for shape in [
            vec![Verb, Pronoun],
            vec![Noun],
            vec![Verb],
            vec![Pronoun, Verb, Adjective, Adjective],
            vec![TokenCategory::Unknown],
        ] {
            let tree = matcher.match_sentence(synthetic(&shape));
            assert!(!tree.valid, "{:?} should be rejected", shape);
            assert!(tree.pattern.is_empty());
            assert_eq!(
                tree.failure_reason,
                Some(MatchFailure::UnrecognizedStructure)
            );
        }
    }

    #[test]
    fn test_length_must_match_exactly() {
        let matcher = SentenceMatcher::new();
        // Prefix of [Pronoun, Verb, Adjective] with an extra token appended
        let tree = matcher.match_sentence(synthetic(&[Pronoun, Verb, Adjective, Noun]));
        assert!(!tree.valid);
    }

    #[test]
    fn test_punctuation_is_ignored_but_kept() {
        let matcher = SentenceMatcher::new();
        let tokens = synthetic(&[Pronoun, Punctuation, Verb, Adjective, Punctuation]);
        let tree = matcher.match_sentence(tokens.clone());
        assert!(tree.valid);
        assert_eq!(tree.pattern, vec![Pronoun, Verb, Adjective]);
        assert_eq!(tree.tokens, tokens);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let matcher = SentenceMatcher::new();
        let tree = matcher.match_sentence(Vec::new());
        assert_eq!(tree.failure_reason, Some(MatchFailure::NoTokens));

        let tree = matcher.match_sentence(synthetic(&[Punctuation, Punctuation]));
        assert!(!tree.valid);
        assert_eq!(tree.failure_reason, Some(MatchFailure::NoTokens));
        assert_eq!(tree.tokens.len(), 2);
    }

    #[test]
    fn test_custom_pattern_list_first_match_wins() {
        let matcher = SentenceMatcher::with_patterns(vec![vec![Noun], vec![Noun, Verb]]);
        assert!(matcher.match_sentence(synthetic(&[Noun])).valid);
        assert!(matcher.match_sentence(synthetic(&[Noun, Verb])).valid);
        assert!(!matcher.match_sentence(synthetic(&[Pronoun])).valid);
    }

    #[test]
    fn test_failure_reason_serializes_as_text() {
        let tree = SentenceMatcher::new().match_sentence(synthetic(&[Verb, Pronoun]));
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["failure_reason"], "unrecognized sentence structure");
        assert_eq!(json["valid"], false);
    }
}
