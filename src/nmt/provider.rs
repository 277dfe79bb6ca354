//! Neural translation provider trait
//!
//! The rule-based pipeline never depends on this module. It describes an
//! optional second path: a pretrained English → Spanish model reached over
//! the network, which can fail independently.

use crate::nmt::error::NmtResult;
use async_trait::async_trait;

/// Generic trait for neural translation providers
///
/// Implementations either call a hosted model ([`crate::nmt::HuggingFaceProvider`])
/// or answer deterministically ([`crate::nmt::MockTranslator`]).
#[async_trait]
pub trait NeuralTranslator: Send + Sync {
    /// Translate one English text into Spanish
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(NmtError)` - If the provider is unreachable or answers badly
    async fn translate(&self, text: &str) -> NmtResult<String>;

    /// Name of the provider, used in logs
    fn provider_name(&self) -> &str;
}
