use async_trait::async_trait;
use parley_config::translator::TranslatorConfig;
use serde::{Deserialize, Serialize};

use crate::languages::is_language_tag;
use crate::{
    AUTO_DETECT, LanguageCode, ProviderKind, ProviderMetadata, TranslateError, Translation,
    Translator, http_client, require_text,
};

/// Build the translation instruction sent to the model
pub fn translation_prompt(from: &str, to: &str, text: &str) -> String {
    format!(
        "Translate the following text from {from} to {to}. \
         Do not explain, just reply with the translated text.\n\n{text}"
    )
}

fn detection_prompt(text: &str) -> String {
    format!(
        "Identify the language of the following text. \
         Reply with its ISO 639-1 code only.\n\n{text}"
    )
}

/// Chat-completions client that translates by prompting an LLM
#[derive(Clone)]
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    detect_source: bool,
}

impl OpenAiTranslator {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
            temperature: 0.2,
            detect_source: false,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_url.clone(),
            model: config.openai_model.clone(),
            temperature: config.temperature,
            detect_source: config.openai_detect_source,
        })
    }

    /// Ask the model for the source language before translating
    pub fn with_source_detection(mut self, enabled: bool) -> Self {
        self.detect_source = enabled;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }

    async fn complete(&self, prompt: String) -> Result<String, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(TranslateError::ApiError(detail));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(TranslateError::ApiError("Empty completion".to_string()));
        }

        Ok(content)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, to: &str) -> Result<Translation, TranslateError> {
        let text = require_text(text)?;
        let to = to.trim().to_string();

        if !is_language_tag(&to) {
            return Err(TranslateError::UnsupportedLanguage(to));
        }

        let from = if self.detect_source {
            self.detect_language(text).await?
        } else {
            AUTO_DETECT.to_string()
        };

        tracing::debug!("OpenAI translate {} -> {} with {}", from, to, self.model);
        let translated = self.complete(translation_prompt(&from, &to, text)).await?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: ProviderKind::OpenAI,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let text = require_text(text)?;
        let reply = self.complete(detection_prompt(text)).await?;

        let code = reply
            .trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-')
            .to_lowercase();

        if !is_language_tag(&code) {
            return Err(TranslateError::ApiError(format!(
                "Unexpected language code: {}",
                reply
            )));
        }

        Ok(code)
    }

    fn supports(&self, lang: &str) -> bool {
        is_language_tag(lang.trim())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            kind: ProviderKind::OpenAI,
            requires_api_key: true,
        }
    }
}
