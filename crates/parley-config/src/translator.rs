use parley_types::{AUTO_DETECT, ProviderKind};
use serde::{Deserialize, Serialize};

fn default_provider() -> ProviderKind {
    ProviderKind::Google
}

fn default_source_lang() -> String {
    AUTO_DETECT.to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_google_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,
    /// Source language passed to Google, "auto" lets the service detect it
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_google_url")]
    pub google_url: String,
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_openai_url")]
    pub openai_url: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Ask the LLM for the source language instead of reporting "auto"
    #[serde(default)]
    pub openai_detect_source: bool,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            source_lang: default_source_lang(),
            to_lang: default_to_lang(),
            google_url: default_google_url(),
            openai_api_key: String::new(),
            openai_url: default_openai_url(),
            openai_model: default_openai_model(),
            temperature: default_temperature(),
            openai_detect_source: false,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
