use std::sync::{Mutex, MutexGuard};

use crate::{HistoryError, HistoryStore, TranslationRecord, tail};

/// In-process history that is gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<TranslationRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Vec<TranslationRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, record: TranslationRecord) -> Result<(), HistoryError> {
        self.records().push(record);
        Ok(())
    }

    fn load(&self, limit: usize) -> Vec<TranslationRecord> {
        tail(self.records().clone(), limit)
    }
}
