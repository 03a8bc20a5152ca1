//! Session metadata handed over by the host
//!
//! Extras follow the same recursive-merge rule as configuration: a caller
//! overriding one nested key leaves its siblings at their defaults.

use serde::Deserialize;

use crate::snapshot::NotesSnapshot;

/// Metadata block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Display title, if the host set one
    pub title: Option<String>,
}

/// Session metadata: title plus the previously saved state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extras {
    pub metadata: Metadata,
    /// Snapshot from an earlier session; empty when starting fresh
    pub previous_state: NotesSnapshot,
}

impl Extras {
    /// Merge a partial extras record over the defaults.
    pub fn merged(patch: ExtrasPatch) -> Self {
        let mut extras = Extras::default();
        if let Some(m) = patch.metadata {
            if let Some(title) = m.title {
                extras.metadata.title = Some(title);
            }
        }
        if let Some(state) = patch.previous_state {
            extras.previous_state = state;
        }
        extras
    }
}

/// Partial extras as supplied by the host
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtrasPatch {
    pub metadata: Option<MetadataPatch>,
    pub previous_state: Option<NotesSnapshot>,
}

/// Partial metadata block
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetadataPatch {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_yields_defaults() {
        let extras = Extras::merged(ExtrasPatch::default());

        assert_eq!(extras.metadata.title, None);
        assert!(extras.previous_state.is_empty());
    }

    #[test]
    fn test_previous_state_from_json() {
        let patch: ExtrasPatch = serde_json::from_str(
            r#"{"metadata": {"title": "Biology 101"}, "previousState": {"recall": "mitosis"}}"#,
        )
        .unwrap();
        let extras = Extras::merged(patch);

        assert_eq!(extras.metadata.title.as_deref(), Some("Biology 101"));
        assert_eq!(extras.previous_state.recall, "mitosis");
        assert_eq!(extras.previous_state.notes, "");
    }
}
