use std::time::Duration;

use parley_config::translator::TranslatorConfig;
pub use parley_types::{AUTO_DETECT, LanguageCode, ProviderKind};

pub mod google;
pub mod languages;
pub mod openai;

pub use google::GoogleTranslator;
pub use languages::{LANGUAGES, is_language_tag, is_supported, language_name, resolve_language};
pub use openai::OpenAiTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language, detecting the source on the way
    async fn translate(&self, text: &str, to: &str) -> Result<Translation, TranslateError>;

    /// Detect language of text
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError>;

    /// Whether the provider accepts this target language code
    fn supports(&self, lang: &str) -> bool;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Detected source language, or "auto" when the provider does not report one
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: ProviderKind,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub kind: ProviderKind,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Nothing to translate")]
    EmptyInput,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl TranslateError {
    /// Transport, auth or backend failure, as opposed to bad input
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            TranslateError::ApiError(_)
                | TranslateError::NetworkError(_)
                | TranslateError::RateLimitExceeded
                | TranslateError::AuthenticationError
        )
    }
}

/// Reject blank input before any request is made
pub(crate) fn require_text(text: &str) -> Result<&str, TranslateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TranslateError::EmptyInput);
    }
    Ok(trimmed)
}

pub(crate) fn http_client(timeout_seconds: u64) -> Result<reqwest::Client, TranslateError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;
    Ok(client)
}

/// Build the provider selected by `kind`
pub fn build_translator(
    kind: ProviderKind,
    config: &TranslatorConfig,
) -> Result<Box<dyn Translator>, TranslateError> {
    let translator: Box<dyn Translator> = match kind {
        ProviderKind::Google => Box::new(GoogleTranslator::from_config(config)?),
        ProviderKind::OpenAI => {
            if config.openai_api_key.is_empty() {
                tracing::debug!("OpenAI provider selected without an API key");
            }
            Box::new(OpenAiTranslator::from_config(config)?)
        }
    };

    tracing::debug!("Using {} translator", kind);
    Ok(translator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(matches!(require_text("   \n"), Err(TranslateError::EmptyInput)));
        assert_eq!(require_text("  hola ").unwrap(), "hola");
    }

    #[test]
    fn test_error_classification() {
        assert!(TranslateError::ApiError("HTTP 500".into()).is_request_failure());
        assert!(TranslateError::AuthenticationError.is_request_failure());
        assert!(!TranslateError::UnsupportedLanguage("xx".into()).is_request_failure());
        assert!(!TranslateError::EmptyInput.is_request_failure());
    }

    #[test]
    fn test_factory_selects_provider() {
        let config = TranslatorConfig::default();

        let google = build_translator(ProviderKind::Google, &config).unwrap();
        assert_eq!(google.metadata().kind, ProviderKind::Google);
        assert!(!google.metadata().requires_api_key);

        let openai = build_translator(ProviderKind::OpenAI, &config).unwrap();
        assert_eq!(openai.metadata().kind, ProviderKind::OpenAI);
        assert!(openai.metadata().requires_api_key);
    }
}
