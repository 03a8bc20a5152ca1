//! Snapshot serialization for session resume
//!
//! The snapshot is the only format that must stay bit-stable across
//! sessions: `{ recall?, notes?, summary? }`, all keys optional on input.
//! An absent key loads as an empty field, never as an error.

use serde::{Deserialize, Serialize};

/// One of the three editable regions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// The recall (cue) column
    Recall,
    /// The main notes area
    Notes,
    /// The summary area
    Summary,
}

/// Snapshot of the three regions' text content
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSnapshot {
    pub recall: String,
    pub notes: String,
    pub summary: String,
}

impl NotesSnapshot {
    /// Check whether no region holds any text
    pub fn is_empty(&self) -> bool {
        self.recall.is_empty() && self.notes.is_empty() && self.summary.is_empty()
    }

    /// Get one region's text
    pub fn get(&self, region: RegionKind) -> &str {
        match region {
            RegionKind::Recall => &self.recall,
            RegionKind::Notes => &self.notes,
            RegionKind::Summary => &self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_load_empty() {
        let snapshot: NotesSnapshot = serde_json::from_str(r#"{"notes": "lecture 3"}"#).unwrap();

        assert_eq!(snapshot.notes, "lecture 3");
        assert_eq!(snapshot.recall, "");
        assert_eq!(snapshot.summary, "");
    }

    #[test]
    fn test_empty_object_loads_empty() {
        let snapshot: NotesSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let snapshot = NotesSnapshot {
            recall: "key terms".to_string(),
            notes: "details".to_string(),
            summary: "the gist".to_string(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: NotesSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
    }
}
