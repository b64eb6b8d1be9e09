// Output formatting: terminal display and JSON reports.

pub mod terminal;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON envelope stamped with the time the data was read from the store.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub generated_at: DateTime<Utc>,
    pub data: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(data: T) -> Self {
        Self {
            generated_at: Utc::now(),
            data,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so accented answers never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("família", 3), "fam...");
        assert_eq!(truncate_chars("pé", 5), "pé");
    }

    #[test]
    fn test_report_envelope() {
        let json = Report::new(vec![1, 2]).to_json().unwrap();
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"data\""));
    }
}
