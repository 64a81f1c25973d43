use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Source language placeholder when the provider did not report a detected code
pub const AUTO_DETECT: &str = "auto";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    Google,
    OpenAI,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "Google",
            ProviderKind::OpenAI => "OpenAI",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl fmt::Display for UnknownProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown translation provider: {}", self.0)
    }
}

impl std::error::Error for UnknownProvider {}

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "openai" => Ok(ProviderKind::OpenAI),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// One completed translation, as persisted in the history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// RFC 3339 UTC time of completion. Kept verbatim when read back.
    pub timestamp: String,
    pub src_lang: LanguageCode,
    pub dest_lang: LanguageCode,
    pub src_text: String,
    pub dest_text: String,
    pub provider: ProviderKind,
}

impl TranslationRecord {
    /// Build a record stamped with the current time
    pub fn new(
        src_lang: impl Into<LanguageCode>,
        dest_lang: impl Into<LanguageCode>,
        src_text: impl Into<String>,
        dest_text: impl Into<String>,
        provider: ProviderKind,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            src_lang: src_lang.into(),
            dest_lang: dest_lang.into(),
            src_text: src_text.into(),
            dest_text: dest_text.into(),
            provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!("google".parse::<ProviderKind>(), Ok(ProviderKind::Google));
        assert_eq!(" OpenAI ".parse::<ProviderKind>(), Ok(ProviderKind::OpenAI));
        assert!("deepl".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn provider_serializes_as_display_name() {
        let json = serde_json::to_string(&ProviderKind::OpenAI).unwrap();
        assert_eq!(json, "\"OpenAI\"");
        assert_eq!(ProviderKind::Google.to_string(), "Google");
    }

    #[test]
    fn new_record_has_utc_timestamp() {
        let record = TranslationRecord::new("en", "fr", "hi", "salut", ProviderKind::Google);
        assert!(record.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }

    #[test]
    fn record_matches_history_schema() {
        let json = r#"{"timestamp":"2025-01-01T00:00:00Z","src_lang":"en","dest_lang":"fr","src_text":"hi","dest_text":"salut","provider":"Google"}"#;
        let record: TranslationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp, "2025-01-01T00:00:00Z");
        assert_eq!(record.provider, ProviderKind::Google);
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
