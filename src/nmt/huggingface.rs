//! Hugging Face inference provider
//!
//! Sends the text to a hosted MarianMT model (`Helsinki-NLP/opus-mt-en-es`
//! by default) through the Hugging Face inference API.
//!
//! # Configuration
//!
//! * `HF_API_TOKEN` - bearer token (required)
//! * `SMARTLANG_NMT_MODEL` - model id (optional)
//! * `SMARTLANG_NMT_URL` - inference base URL (optional)

use crate::nmt::error::{NmtError, NmtResult};
use crate::nmt::provider::NeuralTranslator;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "Helsinki-NLP/opus-mt-en-es";
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

#[derive(Clone)]
pub struct HuggingFaceProvider {
    api_token: String,
    model: String,
    client: reqwest::Client,
    base_url: String,
}

impl HuggingFaceProvider {
    /// Maximum characters accepted per request
    const MAX_CHARS: usize = 5_000;

    /// Create a provider with an explicit token and model id
    ///
    /// # Errors
    ///
    /// `ConfigError` for an empty token or model, `NetworkError` if the HTTP
    /// client cannot be built.
    pub fn new(api_token: String, model: String) -> NmtResult<Self> {
        if api_token.trim().is_empty() {
            return Err(NmtError::ConfigError("API token cannot be empty".to_string()));
        }
        if model.trim().is_empty() {
            return Err(NmtError::ConfigError("Model id cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| NmtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_token,
            model,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider from the environment
    ///
    /// `model` overrides `SMARTLANG_NMT_MODEL` when given.
    pub fn from_env(model: Option<&str>) -> NmtResult<Self> {
        let api_token = std::env::var("HF_API_TOKEN").map_err(|_| {
            NmtError::ConfigError("HF_API_TOKEN environment variable not set".to_string())
        })?;
        let model = model
            .map(str::to_string)
            .or_else(|| std::env::var("SMARTLANG_NMT_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let provider = Self::new(api_token, model)?;
        Ok(match std::env::var("SMARTLANG_NMT_URL") {
            Ok(url) => provider.with_base_url(&url),
            Err(_) => provider,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    /// Pull the translated text out of an inference API response
    ///
    /// The API answers `[{"translation_text": "..."}]`; some deployments
    /// return the bare object.
    fn extract_translation(json: &serde_json::Value) -> NmtResult<String> {
        let entry = match json.as_array() {
            Some(entries) => entries.first().ok_or_else(|| {
                NmtError::TranslationError("Invalid API response: empty array".to_string())
            })?,
            None => json,
        };

        entry["translation_text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                NmtError::TranslationError(
                    "Invalid API response: missing 'translation_text' field".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for HuggingFaceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceProvider")
            .field("api_token", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl NeuralTranslator for HuggingFaceProvider {
    async fn translate(&self, text: &str) -> NmtResult<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        if text.chars().count() > Self::MAX_CHARS {
            return Err(NmtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS
            )));
        }

        let endpoint = self.endpoint();
        debug!("Requesting translation from {}", endpoint);
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_token)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                NmtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                NmtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            NmtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        Self::extract_translation(&json)
    }

    fn provider_name(&self) -> &str {
        "Hugging Face Inference"
    }
}
