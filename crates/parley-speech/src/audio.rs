use std::borrow::Cow;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Failed to read WAV: {0}")]
    Wav(#[from] hound::Error),

    #[error("Unsupported WAV encoding: {0}")]
    Unsupported(String),
}

/// Mono 16-bit PCM, the shape the recognizer uploads
#[derive(Debug, Clone, PartialEq)]
pub struct PcmCapture {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl PcmCapture {
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Raw signed 16-bit little-endian mono, e.g. `arecord -f S16_LE -c 1`
    pub fn from_s16le(bytes: &[u8], sample_rate: u32) -> Self {
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Self::new(samples, sample_rate)
    }

    /// Decode a WAV file, downmixing to mono and requantizing to 16 bits
    pub fn from_wav(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let mut reader = WavReader::open(path)?;
        let spec = reader.spec();
        let channels = usize::from(spec.channels.max(1));

        let interleaved: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 16) => reader.samples::<i16>().collect::<Result<_, _>>()?,
            (SampleFormat::Int, bits @ 8..=32) => reader
                .samples::<i32>()
                .map(|s| s.map(|v| requantize(v, bits)))
                .collect::<Result<_, _>>()?,
            (SampleFormat::Float, 32) => reader
                .samples::<f32>()
                .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16))
                .collect::<Result<_, _>>()?,
            (format, bits) => {
                return Err(AudioError::Unsupported(format!("{:?} {}-bit", format, bits)));
            }
        };

        let samples = if channels == 1 {
            interleaved
        } else {
            interleaved
                .chunks(channels)
                .map(|frame| {
                    let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
                    (sum / frame.len() as i32) as i16
                })
                .collect()
        };

        Ok(Self::new(samples, spec.sample_rate))
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }
}

fn requantize(sample: i32, bits: u16) -> i16 {
    if bits > 16 {
        (sample >> (bits - 16)) as i16
    } else {
        (sample << (16 - bits)) as i16
    }
}

/// Where recognized speech comes from
#[derive(Debug, Clone)]
pub enum AudioSource {
    /// Uploaded waveform file
    WavFile(PathBuf),
    /// Live capture already in memory
    Capture(PcmCapture),
}

impl AudioSource {
    pub fn pcm(&self) -> Result<Cow<'_, PcmCapture>, AudioError> {
        match self {
            AudioSource::WavFile(path) => PcmCapture::from_wav(path).map(Cow::Owned),
            AudioSource::Capture(capture) => Ok(Cow::Borrowed(capture)),
        }
    }
}
