//! Neural translation path
//!
//! An optional alternative to the rule-based [`crate::Translator`]: a hosted
//! pretrained model is asked first and, when it is unavailable or fails, the
//! rule-based pipeline answers instead.
//!
//! # Example
//!
//! ```ignore
//! use smartlang::Translator;
//! use smartlang::nmt::{HuggingFaceProvider, translate_with_fallback};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Translator::builtin()?;
//!     let provider = HuggingFaceProvider::from_env(None)?;
//!     let outcome = translate_with_fallback(&translator, Some(&provider), "I am happy", true).await;
//!     println!("{} ({})", outcome.result.translation.unwrap_or_default(), outcome.model_used);
//!     Ok(())
//! }
//! ```
pub mod error;
pub mod fallback;
pub mod huggingface;
pub mod mock;
pub mod provider;

pub use error::{NmtError, NmtResult};
pub use fallback::{ModelUsed, Outcome, translate_with_fallback};
pub use huggingface::HuggingFaceProvider;
pub use mock::{MockMode, MockTranslator};
pub use provider::NeuralTranslator;
