use std::collections::VecDeque;

use crate::{classify, ScanId, ScanMode, ScanResult, Tier};

/// Maximum number of entries kept in the history.
pub const HISTORY_CAPACITY: usize = 6;
/// Text inputs longer than this are shortened in history rows.
pub const SNIPPET_MAX_CHARS: usize = 60;
const SNIPPET_KEEP_CHARS: usize = 57;
const ELLIPSIS: &str = "...";

/// Snapshot of one successful scan.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: ScanId,
    pub mode: ScanMode,
    pub label: String,
    pub risk_score: f64,
    pub snippet: String,
    /// RFC3339 time the result arrived.
    pub recorded_at: String,
}

impl HistoryEntry {
    pub fn from_result(
        id: ScanId,
        mode: ScanMode,
        input: &str,
        result: &ScanResult,
        recorded_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            mode,
            label: result.label.clone(),
            risk_score: result.risk_score,
            snippet: snippet_for(mode, input),
            recorded_at: recorded_at.into(),
        }
    }

    pub fn tier(&self) -> Tier {
        classify(self.risk_score)
    }
}

/// Display string for a history row.
///
/// Text longer than [`SNIPPET_MAX_CHARS`] keeps its first 57 characters and
/// gains an ellipsis. URLs are never shortened.
pub fn snippet_for(mode: ScanMode, input: &str) -> String {
    match mode {
        ScanMode::Url => input.to_owned(),
        ScanMode::Text => {
            if input.chars().count() > SNIPPET_MAX_CHARS {
                let mut snippet: String = input.chars().take(SNIPPET_KEEP_CHARS).collect();
                snippet.push_str(ELLIPSIS);
                snippet
            } else {
                input.to_owned()
            }
        }
    }
}

/// Most-recent-first log of successful scans, capped at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryCache {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `entry`, evicting from the tail once over capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: ScanId) -> HistoryEntry {
        HistoryEntry {
            id,
            mode: ScanMode::Text,
            label: "safe".into(),
            risk_score: 10.0,
            snippet: format!("scan {id}"),
            recorded_at: String::new(),
        }
    }

    #[test]
    fn seventh_record_evicts_the_oldest() {
        let mut cache = HistoryCache::new();
        for id in 1..=7 {
            cache.record(entry(id));
        }
        let ids: Vec<_> = cache.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn same_entry_twice_takes_two_slots() {
        let mut cache = HistoryCache::new();
        let e = entry(1);
        cache.record(e.clone());
        cache.record(e);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn long_text_snippet_is_shortened_to_sixty_chars() {
        let input = "x".repeat(65);
        let snippet = snippet_for(ScanMode::Text, &input);
        assert_eq!(snippet.chars().count(), 60);
        assert!(snippet.ends_with("..."));
        assert_eq!(&snippet[..57], &input[..57]);
    }

    #[test]
    fn text_at_the_limit_is_kept() {
        let input = "y".repeat(60);
        assert_eq!(snippet_for(ScanMode::Text, &input), input);
        assert_eq!(snippet_for(ScanMode::Text, "short text"), "short text");
    }

    #[test]
    fn urls_are_never_shortened() {
        let url = format!("http://example.com/{}", "a".repeat(200));
        assert_eq!(snippet_for(ScanMode::Url, &url), url);
    }

    #[test]
    fn snippet_cuts_on_character_boundaries() {
        let input = "ü".repeat(61);
        let snippet = snippet_for(ScanMode::Text, &input);
        assert_eq!(snippet, format!("{}...", "ü".repeat(57)));
    }
}
