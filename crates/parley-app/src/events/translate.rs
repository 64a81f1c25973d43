use anyhow::{Context, bail};
use parley_speech::{AudioSource, Recognition};
use parley_translator::{TranslateError, Translation, resolve_language};
use parley_types::TranslationRecord;
use unicode_normalization::UnicodeNormalization;

use crate::state::AppState;

#[derive(Debug)]
pub enum TranslateInput {
    Text(String),
    Audio(AudioSource),
}

#[derive(Debug)]
pub enum TranslateOutcome {
    /// Audio held no speech, nothing was translated
    NoInput,
    Translated {
        translation: Translation,
        /// Recognized speech when the input was audio
        transcript: Option<String>,
        audio: Option<Vec<u8>>,
    },
}

/// Canonical code for a code or display name; unknown codes pass through for
/// the provider to judge
pub fn resolve_target(input: &str) -> anyhow::Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("Please enter a target language code.");
    }

    Ok(resolve_language(trimmed)
        .map(str::to_string)
        .unwrap_or_else(|| trimmed.to_lowercase()))
}

fn prepare_text(text: &str) -> String {
    text.trim().nfc().collect()
}

/// Translate one input, record it in history and synthesize the result
pub async fn handle_translate(
    state: &AppState,
    input: TranslateInput,
    target: &str,
) -> anyhow::Result<TranslateOutcome> {
    let target = resolve_target(target)?;
    if !state.translator.supports(&target) {
        return Err(TranslateError::UnsupportedLanguage(target).into());
    }

    let (text, transcript) = match input {
        TranslateInput::Text(text) => (prepare_text(&text), None),
        TranslateInput::Audio(source) => {
            // The target language doubles as the recognition hint
            match state.recognizer.recognize(&source, &target).await {
                Recognition::Transcript(transcript) => {
                    tracing::info!("Recognized speech: {}", transcript);
                    (prepare_text(&transcript), Some(transcript))
                }
                Recognition::Silence => {
                    tracing::info!("No speech recognized");
                    return Ok(TranslateOutcome::NoInput);
                }
                Recognition::Failed(reason) => bail!("Could not transcribe audio: {reason}"),
            }
        }
    };

    if text.is_empty() {
        bail!("Please enter, upload, or record text.");
    }

    let provider = state.translator.metadata().kind;
    let translation = state
        .translator
        .translate(&text, &target)
        .await
        .with_context(|| format!("Translation with {} failed", provider))?;

    tracing::info!(
        "Translated {} -> {} with {}",
        translation.from,
        translation.to,
        provider
    );

    let record = TranslationRecord::new(
        translation.from.clone(),
        translation.to.clone(),
        text,
        translation.text.clone(),
        translation.provider,
    );

    if let Err(e) = state.history.append(record) {
        tracing::warn!("Translation not saved to history: {}", e);
    }

    let audio = if state.config.speech.speak {
        state
            .synthesizer
            .synthesize(&translation.text, &translation.to)
            .await
    } else {
        None
    };

    Ok(TranslateOutcome::Translated {
        translation,
        transcript,
        audio,
    })
}
