use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::speech::SpeechConfig;
use self::translator::TranslatorConfig;

pub mod history;
pub mod speech;
pub mod translator;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub history: HistoryConfig,
    pub speech: SpeechConfig,
}

impl Config {
    /// Defaults overridden by process environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key/value source. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.translator.openai_api_key = key;
        }

        if let Some(provider) = lookup("PARLEY_PROVIDER").and_then(|v| v.parse().ok()) {
            self.translator.provider = provider;
        }

        if let Some(to_lang) = lookup("PARLEY_TO_LANG") {
            self.translator.to_lang = to_lang;
        }

        if let Some(model) = lookup("OPENAI_MODEL") {
            self.translator.openai_model = model;
        }

        if let Some(timeout) = lookup("PARLEY_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.translator.timeout_seconds = timeout;
        }

        if let Some(path) = lookup("PARLEY_HISTORY_FILE") {
            self.history.path = PathBuf::from(path);
        }

        if let Some(key) = lookup("GOOGLE_SPEECH_KEY") {
            self.speech.stt_api_key = key;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use parley_types::ProviderKind;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.translator.provider, ProviderKind::Google);
        assert_eq!(config.translator.source_lang, "auto");
        assert_eq!(config.translator.openai_model, "gpt-4o");
        assert_eq!(config.history.limit, 20);
        assert!(config.history.path.ends_with(".translator_history.json"));
        assert_eq!(config.speech.sample_rate, 16000);
        assert_eq!(config.speech.capture_seconds, 5);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("OPENAI_API_KEY", "sk-test"),
            ("PARLEY_PROVIDER", "openai"),
            ("PARLEY_HISTORY_FILE", "/tmp/history.json"),
            ("PARLEY_TO_LANG", ""),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.translator.openai_api_key, "sk-test");
        assert_eq!(config.translator.provider, ProviderKind::OpenAI);
        assert_eq!(config.history.path, PathBuf::from("/tmp/history.json"));
        assert_eq!(config.translator.to_lang, "en");
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let json = r#"{ "translator": { "provider": "OpenAI" }, "history": { "limit": 5 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.translator.provider, ProviderKind::OpenAI);
        assert_eq!(config.translator.temperature, 0.2);
        assert_eq!(config.history.limit, 5);
        assert!(config.speech.speak);
    }
}
