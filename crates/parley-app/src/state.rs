use parley_config::Config;
use parley_history::{HistoryStore, JsonFileHistory};
use parley_speech::{
    GoogleSpeechRecognizer, GoogleSpeechSynthesizer, SpeechRecognizer, SpeechSynthesizer,
};
use parley_translator::{Translator, build_translator};

pub struct AppState {
    pub config: Config,
    pub translator: Box<dyn Translator>,
    pub history: Box<dyn HistoryStore>,
    pub synthesizer: Box<dyn SpeechSynthesizer>,
    pub recognizer: Box<dyn SpeechRecognizer>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = build_translator(config.translator.provider, &config.translator)?;
        let history = JsonFileHistory::new(config.history.path.clone());
        tracing::debug!("History file: {}", history.path().display());
        let synthesizer = GoogleSpeechSynthesizer::from_config(&config.speech);
        let recognizer = GoogleSpeechRecognizer::from_config(&config.speech);

        Ok(Self {
            config,
            translator,
            history: Box::new(history),
            synthesizer: Box::new(synthesizer),
            recognizer: Box::new(recognizer),
        })
    }
}
