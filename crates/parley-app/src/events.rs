use anyhow::Context;
use parley_translator::{LANGUAGES, language_name};

use crate::cli::{Command, TranslateArgs};
use crate::io::{InputArgs, collect_input, write_audio};
use crate::state::AppState;

pub mod history;
pub mod translate;

use history::render_history;
use translate::{TranslateOutcome, handle_translate};

/// Run one CLI command against the app state
pub async fn handle_command(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Translate(args) => handle_translate_command(state, args).await,
        Command::History { limit } => {
            let limit = limit.unwrap_or(state.config.history.limit);
            let entries = render_history(state, limit);

            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in entries {
                println!("{entry}\n");
            }
            Ok(())
        }
        Command::Languages => {
            for (code, name) in LANGUAGES {
                println!("{code:<6} {name}");
            }
            Ok(())
        }
    }
}

async fn handle_translate_command(state: &AppState, args: TranslateArgs) -> anyhow::Result<()> {
    let target = args
        .to
        .unwrap_or_else(|| state.config.translator.to_lang.clone());

    let input = collect_input(
        InputArgs {
            text: args.text,
            audio: args.audio,
            pcm: args.pcm,
        },
        &state.config.speech,
    )?;

    match handle_translate(state, input, &target).await? {
        TranslateOutcome::NoInput => {
            println!("Could not transcribe audio: no speech detected.");
        }
        TranslateOutcome::Translated {
            translation,
            transcript,
            audio,
        } => {
            if let Some(transcript) = transcript {
                println!("Recognized speech: {transcript}");
            }
            match language_name(&translation.from) {
                Some(name) => println!("Detected language: {} ({name})", translation.from),
                None => println!("Detected language: {}", translation.from),
            }
            println!("{}", translation.text);

            match (args.speak, audio) {
                (Some(path), Some(audio)) => {
                    write_audio(&path, &audio).context("Could not save speech")?;
                    tracing::info!("Saved speech to {}", path.display());
                }
                (Some(_), None) => {
                    tracing::warn!("No speech available for {}", translation.to);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
