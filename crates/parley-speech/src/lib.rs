//! Speech adapters for parley
//!
//! - `SpeechSynthesizer` turns a translation into MP3 audio
//! - `SpeechRecognizer` turns a WAV file or PCM capture into text
//!
//! Both talk to Google's public web endpoints. Synthesis failures collapse to
//! `None` so callers can skip playback; recognition reports an explicit
//! `Recognition` outcome instead of an error.

pub mod audio;
pub mod locales;
pub mod recognition;
pub mod synthesis;

pub use audio::{AudioError, AudioSource, PcmCapture};
pub use locales::{recognition_locale, resolve_tts_lang};
pub use recognition::{GoogleSpeechRecognizer, Recognition, SpeechRecognizer};
pub use synthesis::{GoogleSpeechSynthesizer, SpeechSynthesizer};
