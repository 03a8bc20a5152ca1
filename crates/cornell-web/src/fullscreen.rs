//! Fullscreen API binding for the widget's mount wrapper

use cornell_core::FullscreenHandle;
use web_sys::{console, Document, HtmlElement};

/// Keys that activate the fullscreen toggle from the keyboard.
///
/// `" "` is the DOM value for Space; `"Spacebar"` is the legacy IE/Edge
/// spelling some hosts still deliver.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Whether the key's default action (page scroll for Space) must be
/// suppressed when it activates the toggle.
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, " " | "Spacebar")
}

/// Fullscreen control backed by the browser Fullscreen API
pub struct WebFullscreen {
    document: Document,
    target: HtmlElement,
}

impl WebFullscreen {
    /// Bind fullscreen control to the widget's mount wrapper
    pub fn new(document: Document, target: HtmlElement) -> Self {
        Self { document, target }
    }
}

impl FullscreenHandle for WebFullscreen {
    fn is_supported(&self) -> bool {
        self.document.fullscreen_enabled()
    }

    fn request_enter(&mut self) {
        if let Err(err) = self.target.request_fullscreen() {
            console::warn_1(&err);
        }
    }

    fn request_exit(&mut self) {
        self.document.exit_fullscreen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn test_only_space_suppresses_default() {
        assert!(suppresses_default(" "));
        assert!(suppresses_default("Spacebar"));
        assert!(!suppresses_default("Enter"));
    }
}
