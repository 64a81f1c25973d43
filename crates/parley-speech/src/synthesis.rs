use async_trait::async_trait;
use parley_config::speech::SpeechConfig;

use crate::locales::resolve_tts_lang;

/// Longest text the TTS endpoint takes per request
pub const MAX_CHUNK_CHARS: usize = 100;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// MP3 audio for `text`, or `None` when the language or backend lets us down
    async fn synthesize(&self, text: &str, lang: &str) -> Option<Vec<u8>>;
}

/// Split text on whitespace into pieces of at most `max` characters
pub fn split_chunks(text: &str, max: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > max {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len > max {
            // No whitespace to break on, cut by characters
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Google Translate's text-to-speech endpoint
#[derive(Clone)]
pub struct GoogleSpeechSynthesizer {
    client: reqwest::Client,
    tts_url: String,
}

impl GoogleSpeechSynthesizer {
    pub fn new(tts_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            tts_url,
        }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(config.tts_url.clone())
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        lang: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, reqwest::Error> {
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let params = [
            ("ie", "UTF-8"),
            ("q", chunk),
            ("tl", lang),
            ("client", "tw-ob"),
            ("total", total.as_str()),
            ("idx", idx.as_str()),
            ("textlen", textlen.as_str()),
        ];

        let bytes = self
            .client
            .get(&self.tts_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeechSynthesizer {
    async fn synthesize(&self, text: &str, lang: &str) -> Option<Vec<u8>> {
        let Some(tts_lang) = resolve_tts_lang(lang) else {
            tracing::warn!("No speech voice for language {}", lang);
            return None;
        };

        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return None;
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            match self.fetch_chunk(chunk, tts_lang, idx, chunks.len()).await {
                Ok(bytes) => audio.extend_from_slice(&bytes),
                Err(e) => {
                    tracing::warn!("Speech synthesis failed: {}", e);
                    return None;
                }
            }
        }

        tracing::debug!("Synthesized {} bytes of {} speech", audio.len(), tts_lang);
        (!audio.is_empty()).then_some(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(split_chunks("  hello   world ", 100), vec!["hello world"]);
        assert!(split_chunks("   ", 100).is_empty());
    }

    #[test]
    fn test_chunks_respect_limit() {
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        let chunks = split_chunks(&text, MAX_CHUNK_CHARS);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CHUNK_CHARS));
        assert_eq!(chunks.join(" "), text.trim());
    }

    #[test]
    fn test_long_word_is_cut() {
        let chunks = split_chunks("ab abcdefg", 3);
        assert_eq!(chunks, vec!["ab", "abc", "def", "g"]);
    }

    #[test]
    fn test_multibyte_counts_chars() {
        let chunks = split_chunks("日本語 テキスト", 3);
        assert_eq!(chunks, vec!["日本語", "テキス", "ト"]);
    }
}
