use parley_types::TranslationRecord;

use crate::state::AppState;

/// One history entry as shown to the user
pub fn format_record(record: &TranslationRecord) -> String {
    format!(
        "{}  {} -> {} ({})\n  Input:  {}\n  Output: {}",
        record.timestamp,
        record.src_lang,
        record.dest_lang,
        record.provider,
        record.src_text,
        record.dest_text
    )
}

/// Recent history, newest first
pub fn render_history(state: &AppState, limit: usize) -> Vec<String> {
    state
        .history
        .load(limit)
        .iter()
        .rev()
        .map(format_record)
        .collect()
}
