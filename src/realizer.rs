//! Spanish surface generation
//!
//! Generation runs in two passes over a validated [`SyntaxTree`]:
//!
//! 1. **Substitution** - every token is replaced by its entry in the target
//!    dictionary section for its category, or kept as-is when there is none.
//! 2. **Grammar rules** - an ordered list of pure transformations, each taking
//!    the translated token list and returning a new one:
//!    adjective postposition, subject pronoun elision and article/noun gender
//!    agreement.
//!
//! The result is then serialized with Spanish punctuation spacing.

use serde::Serialize;
use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::matcher::SyntaxTree;
use crate::token::{TokenCategory, TranslatedToken};

/// Subject pronouns that Spanish verb conjugation makes redundant
pub const ELIDABLE_PRONOUNS: &[&str] = &["i", "you", "he", "she", "we", "they"];

/// Masculine article → feminine counterpart
const FEMININE_ARTICLES: &[(&str, &str)] = &[("un", "una"), ("el", "la")];

type GrammarRule = fn(Vec<TranslatedToken>) -> Vec<TranslatedToken>;

/// Grammar rules in application order
const GRAMMAR_RULES: &[(&str, GrammarRule)] = &[
    ("adjective postposition", postpose_adjectives),
    ("subject pronoun elision", elide_subject_pronoun),
    ("article gender agreement", agree_article_gender),
];

/// Outcome of a translation, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub success: bool,
    pub translation: Option<String>,
    pub tokens: Vec<TranslatedToken>,
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn translated(translation: String, tokens: Vec<TranslatedToken>) -> Self {
        TranslationResult {
            success: true,
            translation: Some(translation),
            tokens,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        TranslationResult {
            success: false,
            translation: None,
            tokens: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Realizer {
    dictionary: Dictionary,
}

impl Realizer {
    pub fn new(dictionary: Dictionary) -> Self {
        Realizer { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn generate(&self, tree: &SyntaxTree) -> TranslationResult {
        if !tree.valid {
            let reason = tree
                .failure_reason
                .map(|reason| reason.to_string())
                .unwrap_or_else(|| "invalid syntax tree".to_string());
            return TranslationResult::failed(reason);
        }

        let substituted = self.substitute(tree);
        let tokens = GRAMMAR_RULES
            .iter()
            .fold(substituted, |tokens, (name, rule)| {
                let rewritten = rule(tokens);
                trace!("Applied {}: {:?}", name, rewritten);
                rewritten
            });

        let translation = serialize(&tokens);
        debug!("Generated {:?}", translation);
        TranslationResult::translated(translation, tokens)
    }

    fn substitute(&self, tree: &SyntaxTree) -> Vec<TranslatedToken> {
        tree.tokens
            .iter()
            .map(|token| {
                // Punctuation and unknown tokens have no section to look up.
                let translated = token
                    .category
                    .section_name()
                    .and_then(|_| self.dictionary.lookup(token.category, &token.value))
                    .unwrap_or(token.value.as_str());
                TranslatedToken::new(token.value.as_str(), translated, token.category)
            })
            .collect()
    }
}

/// Moves each noun in front of the adjectives that precede it.
///
/// Single left-to-right pass: each maximal adjective run moves behind the
/// single noun that immediately follows it, keeping its order. Adjectives
/// never move past a second noun, so `[big, dog, car]` becomes
/// `[dog, big, car]`.
pub fn postpose_adjectives(tokens: Vec<TranslatedToken>) -> Vec<TranslatedToken> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut pending_adjectives: Vec<TranslatedToken> = Vec::new();

    for token in tokens {
        match token.category {
            TokenCategory::Adjective => pending_adjectives.push(token),
            TokenCategory::Noun => {
                output.push(token);
                output.append(&mut pending_adjectives);
            }
            _ => {
                output.append(&mut pending_adjectives);
                output.push(token);
            }
        }
    }
    output.append(&mut pending_adjectives);
    output
}

/// Blanks a leading subject pronoun that is followed by a verb.
///
/// The token keeps its slot; only its translated text becomes empty.
pub fn elide_subject_pronoun(mut tokens: Vec<TranslatedToken>) -> Vec<TranslatedToken> {
    if let [subject, verb, ..] = tokens.as_mut_slice() {
        if subject.category == TokenCategory::Pronoun
            && verb.category == TokenCategory::Verb
            && ELIDABLE_PRONOUNS.contains(&subject.original_value.as_str())
        {
            subject.translated_value.clear();
        }
    }
    tokens
}

/// Switches `un`/`el` to `una`/`la` before a noun whose translation ends in "a".
///
/// This is a surface heuristic, not real grammatical gender: "día" gets "la"
/// and "mano" keeps "el".
pub fn agree_article_gender(tokens: Vec<TranslatedToken>) -> Vec<TranslatedToken> {
    let feminine: Vec<Option<&'static str>> = tokens
        .windows(2)
        .map(|pair| {
            let (article, noun) = (&pair[0], &pair[1]);
            if article.category != TokenCategory::Article
                || noun.category != TokenCategory::Noun
                || !noun.translated_value.ends_with('a')
            {
                return None;
            }
            FEMININE_ARTICLES
                .iter()
                .find(|(masculine, _)| *masculine == article.translated_value)
                .map(|(_, feminine)| *feminine)
        })
        .collect();

    tokens
        .into_iter()
        .enumerate()
        .map(|(i, mut token)| {
            if let Some(Some(replacement)) = feminine.get(i) {
                token.translated_value = replacement.to_string();
            }
            token
        })
        .collect()
}

/// Joins translated tokens into a sentence.
///
/// Punctuation attaches to the preceding text; every other token is
/// separated by one space. Elided tokens produce nothing.
pub fn serialize(tokens: &[TranslatedToken]) -> String {
    let mut text = String::new();
    for token in tokens {
        if token.is_elided() {
            continue;
        }
        if !token.category.is_punctuation() && !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&token.translated_value);
    }
    text.trim().to_string()
}
