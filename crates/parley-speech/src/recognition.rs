use std::cmp::Ordering;

use async_trait::async_trait;
use parley_config::speech::SpeechConfig;
use serde::Deserialize;

use crate::audio::AudioSource;
use crate::locales::recognition_locale;

/// Outcome of a recognition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// Audio was understood as silence or nothing intelligible
    Silence,
    Transcript(String),
    /// Backend or input failure, with the reason
    Failed(String),
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, source: &AudioSource, lang_hint: &str) -> Recognition;
}

#[derive(Deserialize)]
struct RecognizeLine {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<Alternative>,
}

#[derive(Deserialize)]
struct Alternative {
    transcript: String,
    confidence: Option<f32>,
}

/// Pick the best transcript from the newline-delimited JSON the web speech API returns.
/// Leading `{"result":[]}` lines mean "still listening" and are skipped.
pub fn parse_recognize_response(body: &str) -> Option<String> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str::<RecognizeLine>(line).ok())
        .flat_map(|line| line.result)
        .map(|result| result.alternative)
        .find(|alternatives| !alternatives.is_empty())
        .and_then(|alternatives| {
            let best = alternatives
                .iter()
                .filter(|a| a.confidence.is_some())
                .max_by(|a, b| {
                    a.confidence
                        .partial_cmp(&b.confidence)
                        .unwrap_or(Ordering::Equal)
                })
                .or_else(|| alternatives.first())?;
            Some(best.transcript.trim().to_string())
        })
        .filter(|text| !text.is_empty())
}

/// Google's web speech (chromium) endpoint
#[derive(Clone)]
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    stt_url: String,
    api_key: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(stt_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            stt_url,
            api_key,
        }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(config.stt_url.clone(), config.stt_api_key.clone())
    }

    async fn post_audio(
        &self,
        body: Vec<u8>,
        sample_rate: u32,
        locale: &str,
    ) -> Result<String, reqwest::Error> {
        self.client
            .post(&self.stt_url)
            .query(&[
                ("client", "chromium"),
                ("lang", locale),
                ("key", self.api_key.as_str()),
                ("pFilter", "0"),
            ])
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("audio/l16; rate={}", sample_rate),
            )
            .body(body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(&self, source: &AudioSource, lang_hint: &str) -> Recognition {
        if self.api_key.is_empty() {
            return Recognition::Failed("speech recognition key is not configured".to_string());
        }

        let pcm = match source.pcm() {
            Ok(pcm) => pcm,
            Err(e) => return Recognition::Failed(e.to_string()),
        };

        if pcm.is_empty() {
            return Recognition::Silence;
        }

        let locale = recognition_locale(lang_hint);
        tracing::debug!(
            "Recognizing {:.1}s of audio as {}",
            pcm.duration_secs(),
            locale
        );

        match self
            .post_audio(pcm.to_le_bytes(), pcm.sample_rate, locale)
            .await
        {
            Ok(body) => match parse_recognize_response(&body) {
                Some(text) => Recognition::Transcript(text),
                None => Recognition::Silence,
            },
            Err(e) => {
                tracing::warn!("Speech recognition request failed: {}", e);
                Recognition::Failed(format!("Speech recognition failed: {}", e))
            }
        }
    }
}
