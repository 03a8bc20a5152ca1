//! Content owner for the three editable regions
//!
//! Owns the live text of recall, notes and summary. Seeded once from the
//! previous session's snapshot at construction; serialized back on demand.
//! No intermediate caching: every state query reads the live fields.

use crate::config::Config;
use crate::snapshot::{NotesSnapshot, RegionKind};

/// Width (px) at which the layout switches from stacked to two-column
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 768.0;

/// One editable region
#[derive(Clone, Debug)]
pub struct Region {
    /// Section title shown above the field
    pub title: String,
    /// Placeholder shown while the field is empty
    pub placeholder: String,
    /// Row hint for the rendered field
    pub rows: u32,
    text: String,
}

impl Region {
    fn new(title: &str, placeholder: &str, rows: u32, seed: &str) -> Self {
        Self {
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            rows,
            text: seed.to_string(),
        }
    }

    /// Current text content
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Layout mode derived from the measured container width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Regions stacked vertically (narrow container)
    #[default]
    Stacked,
    /// Recall column beside the notes area
    TwoColumn,
}

/// Owner of the three editable regions
pub struct NotesContent {
    recall: Region,
    notes: Region,
    summary: Region,
    fullscreen: bool,
    measured_width: f32,
    layout: LayoutMode,
}

impl NotesContent {
    /// Construct from merged configuration, seeding each region from the
    /// previous session's snapshot. A missing or empty snapshot yields
    /// empty fields.
    pub fn new(config: &Config, previous_state: &NotesSnapshot) -> Self {
        Self {
            recall: Region::new(
                &config.recall_title,
                &config.recall_placeholder,
                config.field_size_notes,
                &previous_state.recall,
            ),
            notes: Region::new(
                &config.notes_title,
                &config.notes_placeholder,
                config.field_size_notes,
                &previous_state.notes,
            ),
            summary: Region::new(
                &config.summary_title,
                &config.summary_placeholder,
                config.field_size_summary,
                &previous_state.summary,
            ),
            fullscreen: false,
            measured_width: 0.0,
            layout: LayoutMode::Stacked,
        }
    }

    /// Get a region descriptor
    pub fn region(&self, kind: RegionKind) -> &Region {
        match kind {
            RegionKind::Recall => &self.recall,
            RegionKind::Notes => &self.notes,
            RegionKind::Summary => &self.summary,
        }
    }

    /// Update a region's live text (called on every input edit)
    pub fn set_text(&mut self, kind: RegionKind, text: &str) {
        let region = match kind {
            RegionKind::Recall => &mut self.recall,
            RegionKind::Notes => &mut self.notes,
            RegionKind::Summary => &mut self.summary,
        };
        region.text = text.to_string();
    }

    /// Serialize the live field contents into a snapshot
    pub fn current_state(&self) -> NotesSnapshot {
        NotesSnapshot {
            recall: self.recall.text.clone(),
            notes: self.notes.text.clone(),
            summary: self.summary.text.clone(),
        }
    }

    /// Clear all three regions (retry support)
    pub fn clear(&mut self) {
        self.recall.text.clear();
        self.notes.text.clear();
        self.summary.text.clear();
    }

    /// Switch layout mode for fullscreen. Idempotent: repeating the
    /// current state is a no-op.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }
        self.fullscreen = fullscreen;
        self.relayout();
    }

    /// Whether the content is currently laid out for fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Record the latest measured container width
    pub fn set_measured_width(&mut self, width: f32) {
        self.measured_width = width;
    }

    /// Re-derive the layout mode from the last measured width. Safe to
    /// call before any measurement or edit.
    pub fn resize(&mut self) {
        self.relayout();
    }

    /// Current layout mode
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    fn relayout(&mut self) {
        self.layout = if self.fullscreen || self.measured_width >= WIDE_LAYOUT_MIN_WIDTH {
            LayoutMode::TwoColumn
        } else {
            LayoutMode::Stacked
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_content_is_empty() {
        let content = NotesContent::new(&Config::default(), &NotesSnapshot::default());

        assert_eq!(content.current_state(), NotesSnapshot::default());
        assert!(content.current_state().is_empty());
    }

    #[test]
    fn test_seeding_from_previous_state() {
        let previous = NotesSnapshot {
            recall: "cue".to_string(),
            notes: "body".to_string(),
            summary: "gist".to_string(),
        };
        let content = NotesContent::new(&Config::default(), &previous);

        assert_eq!(content.region(RegionKind::Recall).text(), "cue");
        assert_eq!(content.region(RegionKind::Notes).text(), "body");
        assert_eq!(content.region(RegionKind::Summary).text(), "gist");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let config = Config::default();
        let mut first = NotesContent::new(&config, &NotesSnapshot::default());
        first.set_text(RegionKind::Notes, "photosynthesis");
        first.set_text(RegionKind::Summary, "plants eat light");

        let saved = first.current_state();
        let second = NotesContent::new(&config, &saved);

        assert_eq!(second.current_state(), saved);
    }

    #[test]
    fn test_state_reflects_live_edits() {
        let mut content = NotesContent::new(&Config::default(), &NotesSnapshot::default());

        content.set_text(RegionKind::Recall, "a");
        assert_eq!(content.current_state().recall, "a");
        content.set_text(RegionKind::Recall, "ab");
        assert_eq!(content.current_state().recall, "ab");
    }

    #[test]
    fn test_set_fullscreen_is_idempotent() {
        let mut content = NotesContent::new(&Config::default(), &NotesSnapshot::default());

        content.set_fullscreen(true);
        assert!(content.is_fullscreen());
        assert_eq!(content.layout(), LayoutMode::TwoColumn);

        content.set_fullscreen(true);
        assert!(content.is_fullscreen());

        content.set_fullscreen(false);
        content.set_fullscreen(false);
        assert!(!content.is_fullscreen());
    }

    #[test]
    fn test_layout_follows_measured_width() {
        let mut content = NotesContent::new(&Config::default(), &NotesSnapshot::default());

        // Resize before any measurement is safe and stays stacked
        content.resize();
        assert_eq!(content.layout(), LayoutMode::Stacked);

        content.set_measured_width(1024.0);
        content.resize();
        assert_eq!(content.layout(), LayoutMode::TwoColumn);

        content.set_measured_width(400.0);
        content.resize();
        assert_eq!(content.layout(), LayoutMode::Stacked);
    }

    #[test]
    fn test_clear_empties_all_regions() {
        let previous = NotesSnapshot {
            recall: "x".to_string(),
            notes: "y".to_string(),
            summary: "z".to_string(),
        };
        let mut content = NotesContent::new(&Config::default(), &previous);

        content.clear();
        assert!(content.current_state().is_empty());
    }
}
