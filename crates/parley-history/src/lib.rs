mod file;
mod memory;

pub use file::JsonFileHistory;
pub use memory::MemoryHistory;
pub use parley_types::TranslationRecord;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to write history: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only log of completed translations
pub trait HistoryStore: Send + Sync {
    /// Add a record after the existing ones. Unreadable existing history is
    /// replaced rather than reported.
    fn append(&self, record: TranslationRecord) -> Result<(), HistoryError>;

    /// The most recent `limit` records, oldest first. Never fails: a missing
    /// or corrupt log reads as empty.
    fn load(&self, limit: usize) -> Vec<TranslationRecord>;
}

/// Last `limit` items of `records`, keeping their order
pub(crate) fn tail(mut records: Vec<TranslationRecord>, limit: usize) -> Vec<TranslationRecord> {
    let skip = records.len().saturating_sub(limit);
    records.drain(..skip);
    records
}
