use serde::Serialize;
use tracing::warn;

use crate::nmt::provider::NeuralTranslator;
use crate::realizer::TranslationResult;
use crate::translator::{Analysis, Translator};

/// Which engine produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelUsed {
    #[serde(rename = "nmt")]
    Neural,
    #[serde(rename = "rule-based")]
    RuleBased,
}

impl std::fmt::Display for ModelUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelUsed::Neural => write!(f, "nmt"),
            ModelUsed::RuleBased => write!(f, "rule-based"),
        }
    }
}

/// Result of [`translate_with_fallback`].
///
/// `analysis` is always the rule-based run, so callers can show tokens and
/// the parse even when the neural answer was used. A neural `result` carries
/// no per-token breakdown.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub model_used: ModelUsed,
    pub result: TranslationResult,
    pub analysis: Analysis,
    /// Neural failure that caused the fallback, if any
    pub nmt_error: Option<String>,
}

/// Translate with the neural provider when asked, falling back to the
/// rule-based pipeline if it is absent or fails.
pub async fn translate_with_fallback(
    translator: &Translator,
    nmt: Option<&dyn NeuralTranslator>,
    text: &str,
    use_nmt: bool,
) -> Outcome {
    let analysis = translator.analyze(text);

    let nmt_error = match (use_nmt, nmt) {
        (false, _) => None,
        (true, None) => Some("no neural provider configured".to_string()),
        (true, Some(provider)) => match provider.translate(text).await {
            Ok(translation) => {
                return Outcome {
                    model_used: ModelUsed::Neural,
                    result: TranslationResult::translated(translation, Vec::new()),
                    analysis,
                    nmt_error: None,
                };
            }
            Err(e) => {
                warn!(
                    "{} failed, using rule-based translation: {}",
                    provider.provider_name(),
                    e
                );
                Some(e.to_string())
            }
        },
    };

    Outcome {
        model_used: ModelUsed::RuleBased,
        result: analysis.result.clone(),
        analysis,
        nmt_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmt::MockTranslator;

    fn translator() -> Translator {
        Translator::builtin().unwrap()
    }

    #[tokio::test]
    async fn test_rule_based_when_not_requested() {
        let mock = MockTranslator::with_mappings([("I am happy", "Estoy contento")]);
        let outcome =
            translate_with_fallback(&translator(), Some(&mock), "I am happy", false).await;
        assert_eq!(outcome.model_used, ModelUsed::RuleBased);
        assert_eq!(outcome.result.translation.as_deref(), Some("estoy feliz"));
        assert_eq!(outcome.nmt_error, None);
    }

    #[tokio::test]
    async fn test_neural_answer_used() {
        let mock = MockTranslator::with_mappings([("I am happy", "Estoy contento")]);
        let outcome =
            translate_with_fallback(&translator(), Some(&mock), "I am happy", true).await;
        assert_eq!(outcome.model_used, ModelUsed::Neural);
        assert!(outcome.result.success);
        assert_eq!(outcome.result.translation.as_deref(), Some("Estoy contento"));
        assert!(outcome.analysis.tree.valid);
    }

    #[tokio::test]
    async fn test_neural_failure_falls_back() {
        let mock = MockTranslator::failing("model offline");
        let outcome =
            translate_with_fallback(&translator(), Some(&mock), "I am happy", true).await;
        assert_eq!(outcome.model_used, ModelUsed::RuleBased);
        assert_eq!(outcome.result.translation.as_deref(), Some("estoy feliz"));
        assert!(outcome.nmt_error.unwrap().contains("model offline"));
    }

    #[tokio::test]
    async fn test_missing_provider_falls_back() {
        let outcome = translate_with_fallback(&translator(), None, "Table", true).await;
        assert_eq!(outcome.model_used, ModelUsed::RuleBased);
        assert!(!outcome.result.success);
        assert!(outcome.nmt_error.is_some());
    }

    #[test]
    fn test_model_used_wire_names() {
        assert_eq!(serde_json::to_value(ModelUsed::Neural).unwrap(), "nmt");
        assert_eq!(serde_json::to_value(ModelUsed::RuleBased).unwrap(), "rule-based");
        assert_eq!(ModelUsed::RuleBased.to_string(), "rule-based");
    }
}
