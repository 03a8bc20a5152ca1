//! Widget configuration with recursive patch merging
//!
//! The host hands the widget a partial parameter record. Merging happens
//! once, at construction: caller values win at the leaf level, missing
//! leaves inherit the documented default. The merge is recursive for the
//! nested `behaviour` and `l10n` records, so overriding one nested key
//! never erases its siblings.

use serde::Deserialize;

/// Behavioural settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Behaviour {
    /// Whether a "show solutions" button is offered
    pub enable_solutions_button: bool,
    /// Whether the task can be retried
    pub enable_retry: bool,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            enable_solutions_button: false,
            enable_retry: false,
        }
    }
}

/// UI strings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct L10n {
    /// Label for the submit affordance
    pub submit: String,
    /// Accessible label for the fullscreen toggle
    pub fullscreen: String,
}

impl Default for L10n {
    fn default() -> Self {
        Self {
            submit: "Submit".to_string(),
            fullscreen: "Fullscreen".to_string(),
        }
    }
}

/// Fully populated widget configuration
///
/// Immutable after construction. Every field has a default, so a caller
/// supplying a partial record never produces an undefined field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Instructional text shown above the note-taking area
    pub instructions: String,
    /// Title of the recall column
    pub recall_title: String,
    /// Placeholder for the recall column
    pub recall_placeholder: String,
    /// Title of the notes area
    pub notes_title: String,
    /// Placeholder for the notes area
    pub notes_placeholder: String,
    /// Title of the summary area
    pub summary_title: String,
    /// Placeholder for the summary area
    pub summary_placeholder: String,
    /// Row hint for the notes area
    pub field_size_notes: u32,
    /// Row hint for the summary area
    pub field_size_summary: u32,
    /// Behavioural settings
    pub behaviour: Behaviour,
    /// UI strings
    pub l10n: L10n,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instructions: String::new(),
            recall_title: "Recall".to_string(),
            recall_placeholder: "Enter your keywords, questions ...".to_string(),
            notes_title: "Notes".to_string(),
            notes_placeholder: "Enter dates, details, definitions ...".to_string(),
            summary_title: "Summary".to_string(),
            summary_placeholder: "Enter your summary ...".to_string(),
            field_size_notes: 10,
            field_size_summary: 7,
            behaviour: Behaviour::default(),
            l10n: L10n::default(),
        }
    }
}

impl Config {
    /// Merge a partial parameter record over the defaults.
    ///
    /// Precedence: a leaf present in the patch wins; an absent leaf keeps
    /// its default. Nested records merge key by key, never wholesale.
    pub fn merged(patch: ConfigPatch) -> Self {
        let mut config = Config::default();
        config.apply(patch);
        config
    }

    fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.instructions {
            self.instructions = v;
        }
        if let Some(v) = patch.recall_title {
            self.recall_title = v;
        }
        if let Some(v) = patch.recall_placeholder {
            self.recall_placeholder = v;
        }
        if let Some(v) = patch.notes_title {
            self.notes_title = v;
        }
        if let Some(v) = patch.notes_placeholder {
            self.notes_placeholder = v;
        }
        if let Some(v) = patch.summary_title {
            self.summary_title = v;
        }
        if let Some(v) = patch.summary_placeholder {
            self.summary_placeholder = v;
        }
        if let Some(v) = patch.field_size_notes {
            self.field_size_notes = v;
        }
        if let Some(v) = patch.field_size_summary {
            self.field_size_summary = v;
        }
        if let Some(b) = patch.behaviour {
            if let Some(v) = b.enable_solutions_button {
                self.behaviour.enable_solutions_button = v;
            }
            if let Some(v) = b.enable_retry {
                self.behaviour.enable_retry = v;
            }
        }
        if let Some(l) = patch.l10n {
            if let Some(v) = l.submit {
                self.l10n.submit = v;
            }
            if let Some(v) = l.fullscreen {
                self.l10n.fullscreen = v;
            }
        }
    }
}

/// Partial configuration as supplied by the host
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigPatch {
    pub instructions: Option<String>,
    pub recall_title: Option<String>,
    pub recall_placeholder: Option<String>,
    pub notes_title: Option<String>,
    pub notes_placeholder: Option<String>,
    pub summary_title: Option<String>,
    pub summary_placeholder: Option<String>,
    pub field_size_notes: Option<u32>,
    pub field_size_summary: Option<u32>,
    pub behaviour: Option<BehaviourPatch>,
    pub l10n: Option<L10nPatch>,
}

/// Partial behavioural settings
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviourPatch {
    pub enable_solutions_button: Option<bool>,
    pub enable_retry: Option<bool>,
}

/// Partial UI strings
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct L10nPatch {
    pub submit: Option<String>,
    pub fullscreen: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_yields_defaults() {
        let config = Config::merged(ConfigPatch::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_leaf_override() {
        let config = Config::merged(ConfigPatch {
            recall_title: Some("Cues".to_string()),
            field_size_notes: Some(20),
            ..Default::default()
        });

        assert_eq!(config.recall_title, "Cues");
        assert_eq!(config.field_size_notes, 20);
        // Untouched leaves keep their defaults
        assert_eq!(config.notes_title, "Notes");
        assert_eq!(config.field_size_summary, 7);
    }

    #[test]
    fn test_nested_override_keeps_siblings() {
        let config = Config::merged(ConfigPatch {
            behaviour: Some(BehaviourPatch {
                enable_retry: Some(true),
                ..Default::default()
            }),
            l10n: Some(L10nPatch {
                fullscreen: Some("Vollbild".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert!(config.behaviour.enable_retry);
        assert!(!config.behaviour.enable_solutions_button);
        assert_eq!(config.l10n.fullscreen, "Vollbild");
        assert_eq!(config.l10n.submit, "Submit");
    }

    #[test]
    fn test_patch_from_json_with_unknown_keys() {
        // Host records carry keys this core ignores; absent keys default
        let patch: ConfigPatch = serde_json::from_str(
            r#"{"notesTitle": "My Notes", "behaviour": {"enableRetry": true}, "subContentId": "x"}"#,
        )
        .unwrap();
        let config = Config::merged(patch);

        assert_eq!(config.notes_title, "My Notes");
        assert!(config.behaviour.enable_retry);
        assert_eq!(config.summary_title, "Summary");
    }
}
