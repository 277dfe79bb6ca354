//! Mock neural translator for testing
//!
//! Deterministic and offline, so the fallback logic and the web layer can be
//! tested without a model endpoint.

use crate::nmt::error::{NmtError, NmtResult};
use crate::nmt::provider::NeuralTranslator;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Predefined text → translation pairs; unknown text is echoed back
    Mappings(HashMap<String, String>),
    /// Simulate a provider failure
    Error(String),
    /// Return input unchanged
    NoOp,
}

#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode }
    }

    /// A mock answering from `pairs`
    pub fn with_mappings<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(MockMode::Mappings(
            pairs
                .into_iter()
                .map(|(text, translation)| (text.to_string(), translation.to_string()))
                .collect(),
        ))
    }

    /// A mock that always fails with `message`
    pub fn failing(message: &str) -> Self {
        Self::new(MockMode::Error(message.to_string()))
    }
}

#[async_trait]
impl NeuralTranslator for MockTranslator {
    async fn translate(&self, text: &str) -> NmtResult<String> {
        match &self.mode {
            MockMode::Mappings(map) => Ok(map
                .get(text)
                .cloned()
                .unwrap_or_else(|| text.to_string())),
            MockMode::Error(msg) => Err(NmtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
