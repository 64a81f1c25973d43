use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const HISTORY_FILE_NAME: &str = ".translator_history.json";

fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE_NAME)
}

fn default_limit() -> usize {
    20
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// How many entries `parley history` shows by default
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            limit: default_limit(),
        }
    }
}
