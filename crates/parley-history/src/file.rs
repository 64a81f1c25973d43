use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{HistoryError, HistoryStore, TranslationRecord, tail};

/// History kept as one pretty-printed JSON array, rewritten on every append.
///
/// There is no locking: two processes appending at once can lose a record.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Existing entries as raw JSON so hand-added fields survive a rewrite
    fn read_entries(&self) -> Vec<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read history {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Value>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "History {} is not a JSON array, starting over: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&self, record: TranslationRecord) -> Result<(), HistoryError> {
        let mut entries = self.read_entries();
        entries.push(serde_json::to_value(&record)?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        tracing::debug!(
            "Appended history entry #{} to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self, limit: usize) -> Vec<TranslationRecord> {
        let records: Vec<TranslationRecord> = self
            .read_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        "Skipping history entry #{} in {}: {}",
                        i + 1,
                        self.path.display(),
                        e
                    );
                    None
                }
            })
            .collect();

        tail(records, limit)
    }
}
