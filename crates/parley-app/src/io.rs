use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use parley_config::speech::SpeechConfig;
use parley_speech::{AudioSource, PcmCapture};

use crate::events::translate::TranslateInput;

/// Where the text to translate comes from, in order of precedence
#[derive(Debug, Default)]
pub struct InputArgs {
    pub text: Vec<String>,
    pub audio: Option<PathBuf>,
    pub pcm: Option<PathBuf>,
}

/// Read a raw S16LE mono capture from a file or `-` for stdin, cut to the
/// configured capture length
pub fn read_capture(path: &Path, speech: &SpeechConfig) -> anyhow::Result<PcmCapture> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read capture from stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Failed to read capture {}", path.display()))?
    };

    let mut capture = PcmCapture::from_s16le(&bytes, speech.sample_rate);
    let max_samples = speech.capture_seconds as usize * speech.sample_rate as usize;
    if capture.samples.len() > max_samples {
        tracing::debug!(
            "Capture longer than {}s, truncating",
            speech.capture_seconds
        );
        capture.samples.truncate(max_samples);
    }

    Ok(capture)
}

pub fn collect_input(args: InputArgs, speech: &SpeechConfig) -> anyhow::Result<TranslateInput> {
    if let Some(pcm) = args.pcm {
        tracing::info!("Using microphone capture");
        return Ok(TranslateInput::Audio(AudioSource::Capture(read_capture(
            &pcm, speech,
        )?)));
    }

    if let Some(wav) = args.audio {
        tracing::info!("Using uploaded audio {}", wav.display());
        return Ok(TranslateInput::Audio(AudioSource::WavFile(wav)));
    }

    Ok(TranslateInput::Text(args.text.join(" ")))
}

pub fn write_audio(path: &Path, audio: &[u8]) -> anyhow::Result<()> {
    fs::write(path, audio).with_context(|| format!("Failed to write audio {}", path.display()))
}
