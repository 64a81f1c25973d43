use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use parley_types::ProviderKind;

#[derive(Parser, Debug)]
#[command(
    name = "parley",
    version,
    about = "Translate text or speech and keep a local history"
)]
pub struct Cli {
    /// Configuration profile to load
    #[arg(long, global = true, default_value = "main")]
    pub profile: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text, an uploaded WAV file, or a raw microphone capture
    Translate(TranslateArgs),
    /// Show recent translations, newest first
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List target language codes and names
    Languages,
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Text to translate
    pub text: Vec<String>,

    /// Target language code or name (e.g. en, es, "Chinese (Simplified)")
    #[arg(short, long)]
    pub to: Option<String>,

    /// Translation engine: google or openai
    #[arg(short, long)]
    pub provider: Option<ProviderKind>,

    /// WAV file to transcribe instead of text
    #[arg(long, conflicts_with = "pcm")]
    pub audio: Option<PathBuf>,

    /// Raw 16-bit mono microphone capture, `-` for stdin
    #[arg(long)]
    pub pcm: Option<PathBuf>,

    /// Write the spoken translation (MP3) to this file
    #[arg(long)]
    pub speak: Option<PathBuf>,
}
