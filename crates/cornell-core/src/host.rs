//! Injected host-service interfaces
//!
//! The hosting framework provides fullscreen control, question chrome and a
//! title-sanitization helper. The core consumes them through these narrow
//! traits so it can run against fakes in tests and against web-sys in the
//! glue crate. All defaults are conservative: no capability, no chrome.

/// Fullscreen control for the widget's mount wrapper.
///
/// The handle only issues requests; the actual state transition arrives
/// back through the host's fullscreen-change events.
pub trait FullscreenHandle {
    /// Whether the environment supports fullscreen at all
    fn is_supported(&self) -> bool {
        false
    }

    /// Ask the host to enter fullscreen on the mount wrapper
    fn request_enter(&mut self) {}

    /// Ask the host to leave fullscreen
    fn request_exit(&mut self) {}
}

/// Title sanitization as provided by the host framework
pub trait TitleSanitizer {
    /// Strip markup from a raw title, returning display text
    fn sanitize(&self, raw: &str) -> String;
}

/// The host's outer question chrome around the widget
pub trait WidgetChrome {
    /// Whether the outer container exists in the mounted DOM yet
    fn container_present(&self) -> bool {
        false
    }

    /// Insert the fullscreen toggle as the container's first child
    fn insert_fullscreen_toggle(&mut self, label: &str);
}

/// Fullscreen handle for environments without the capability
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFullscreen;

impl FullscreenHandle for NoFullscreen {}

/// Pass-through sanitizer for hosts without markup in titles
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTitle;

impl TitleSanitizer for PlainTitle {
    fn sanitize(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}

/// Chrome stub for headless operation; never has a container
#[derive(Clone, Copy, Debug, Default)]
pub struct NoChrome;

impl WidgetChrome for NoChrome {
    fn insert_fullscreen_toggle(&mut self, _label: &str) {}
}

/// Bundle of host services handed to the controller at construction
pub struct HostBindings {
    pub fullscreen: Box<dyn FullscreenHandle>,
    pub titles: Box<dyn TitleSanitizer>,
    pub chrome: Box<dyn WidgetChrome>,
}

impl Default for HostBindings {
    fn default() -> Self {
        Self {
            fullscreen: Box::new(NoFullscreen),
            titles: Box::new(PlainTitle),
            chrome: Box::new(NoChrome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_headless() {
        let bindings = HostBindings::default();

        assert!(!bindings.fullscreen.is_supported());
        assert!(!bindings.chrome.container_present());
        assert_eq!(bindings.titles.sanitize("  My Notes "), "My Notes");
    }
}
