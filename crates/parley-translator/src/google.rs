use async_trait::async_trait;
use parley_config::translator::TranslatorConfig;
use serde_json::Value;

use crate::languages::is_supported;
use crate::{
    AUTO_DETECT, LanguageCode, ProviderKind, ProviderMetadata, TranslateError, Translation,
    Translator, http_client, require_text,
};

/// Client for the public Google Translate web endpoint
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
    source_lang: LanguageCode,
}

impl GoogleTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            source_lang: AUTO_DETECT.to_string(),
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            api_url: config.google_url.clone(),
            source_lang: config.source_lang.to_lowercase(),
        })
    }

    /// Use a pre-detected source language instead of server-side detection
    pub fn with_source_lang(mut self, lang: impl Into<LanguageCode>) -> Self {
        self.source_lang = lang.into().to_lowercase();
        self
    }

    async fn request(&self, text: &str, from: &str, to: &str) -> Result<Value, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))
    }
}

/// Translated segments live at `[0][i][0]`
fn translated_text(json: &Value) -> String {
    json.get(0)
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Detected source language lives at `[2]`
fn detected_language(json: &Value) -> Option<LanguageCode> {
    json.get(2)
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())
        .map(str::to_lowercase)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, to: &str) -> Result<Translation, TranslateError> {
        let text = require_text(text)?;
        let to = to.trim().to_lowercase();

        if !is_supported(&to) {
            return Err(TranslateError::UnsupportedLanguage(to));
        }

        tracing::debug!("Google translate {} -> {}", self.source_lang, to);
        let json = self.request(text, &self.source_lang, &to).await?;

        let translated = translated_text(&json);
        if translated.trim().is_empty() {
            return Err(TranslateError::ApiError(
                "No translation in response".to_string(),
            ));
        }

        let from = detected_language(&json).unwrap_or_else(|| self.source_lang.clone());

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: ProviderKind::Google,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let text = require_text(text)?;
        let json = self.request(text, AUTO_DETECT, "en").await?;

        detected_language(&json)
            .ok_or_else(|| TranslateError::ApiError("No detected language".to_string()))
    }

    fn supports(&self, lang: &str) -> bool {
        is_supported(lang)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            kind: ProviderKind::Google,
            requires_api_key: false,
        }
    }
}
