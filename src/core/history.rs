// src/core/history.rs
use serde::{Deserialize, Serialize};

use crate::models::GeneratedPassword;

pub const MAX_HISTORY: usize = 5;

/// Recently generated passwords, newest first. Never longer than [`MAX_HISTORY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<GeneratedPassword>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[GeneratedPassword] {
        &self.entries
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&GeneratedPassword> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Prepend and truncate; the caller keeps the returned log
pub fn record(entry: GeneratedPassword, log: &HistoryLog) -> HistoryLog {
    let entries = std::iter::once(entry)
        .chain(log.entries.iter().cloned())
        .take(MAX_HISTORY)
        .collect();
    HistoryLog { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strength::evaluate;

    fn entry(value: &str) -> GeneratedPassword {
        GeneratedPassword::new(value.to_string(), &evaluate(value))
    }

    #[test]
    fn test_record_prepends() {
        let log = record(entry("first"), &HistoryLog::new());
        let log = record(entry("second"), &log);
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|e| e.value.as_str()), Some("second"));
        assert_eq!(log.entries()[1].value, "first");
    }

    #[test]
    fn test_six_records_keep_last_five() {
        let mut log = HistoryLog::new();
        for i in 1..=6 {
            log = record(entry(&format!("pw{}", i)), &log);
        }
        let values: Vec<&str> = log.entries().iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["pw6", "pw5", "pw4", "pw3", "pw2"]);
    }

    #[test]
    fn test_record_leaves_input_untouched() {
        let log = record(entry("kept"), &HistoryLog::new());
        let _ = record(entry("new"), &log);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].value, "kept");
    }

    #[test]
    fn test_entry_copies_strength_fields() {
        let e = entry("aaaaaaaaaaaa");
        assert_eq!(e.strength, "Weak");
        assert_eq!(e.crack_time, "A few seconds");
        assert_eq!(e.security_score, 30);
    }
}
