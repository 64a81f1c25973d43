use std::process::ExitCode;

use clap::Parser;
use parley_types::ProviderKind;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;


use self::cli::{Cli, Command};
use self::events::handle_command;
use self::profile::ProfileStore;
use self::state::AppState;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Logs go to stderr so stdout stays clean for translations.
/// `PARLEY_LOG_FORMAT=json` switches to structured output.
fn init_tracing() {
    let json = std::env::var("PARLEY_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let profiles = ProfileStore::user_default();
    if let Err(e) = profiles.init() {
        tracing::warn!("Could not initialize user config: {e}");
    }

    let mut config = profiles.load(&cli.profile)?;
    config.apply_env();

    if let Command::Translate(args) = &cli.command {
        if let Some(provider) = args.provider {
            config.translator.provider = provider;
        }
    }

    if config.translator.provider == ProviderKind::OpenAI
        && config.translator.openai_api_key.is_empty()
    {
        eprintln!("Warning: OpenAI key required for OpenAI provider (set OPENAI_API_KEY).");
    }

    let state = AppState::new(config)?;
    handle_command(&state, cli.command).await
}
