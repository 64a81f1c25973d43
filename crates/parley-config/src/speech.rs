use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_tts_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_stt_url() -> String {
    "https://www.google.com/speech-api/v2/recognize".to_string()
}

fn default_capture_seconds() -> u32 {
    5
}

fn default_sample_rate() -> u32 {
    16000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SpeechConfig {
    /// Synthesize the translation after each request
    #[serde(default = "default_enabled")]
    pub speak: bool,
    #[serde(default = "default_tts_url")]
    pub tts_url: String,
    #[serde(default = "default_stt_url")]
    pub stt_url: String,
    #[serde(default)]
    pub stt_api_key: String,
    /// Length of a live microphone capture
    #[serde(default = "default_capture_seconds")]
    pub capture_seconds: u32,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            speak: default_enabled(),
            tts_url: default_tts_url(),
            stt_url: default_stt_url(),
            stt_api_key: String::new(),
            capture_seconds: default_capture_seconds(),
            sample_rate: default_sample_rate(),
        }
    }
}
