//! Session controller: the object the host instantiates
//!
//! Owns the merged configuration and extras, the single content owner,
//! the signal bus and the injected host services. Every host-facing
//! accessor absorbs missing data by substituting a documented default;
//! none of them fail. The one defect-not-condition case is attaching
//! content twice, which is guarded by an assertion.

use crate::config::{Config, ConfigPatch};
use crate::content::NotesContent;
use crate::extras::{Extras, ExtrasPatch};
use crate::host::HostBindings;
use crate::signal::{Signal, SignalBus};
use crate::snapshot::{NotesSnapshot, RegionKind};
use crate::xapi::{Definition, XapiEvent, XapiStatement};
use crate::DEFAULT_TITLE;

/// Outward-facing controller for one widget instance
pub struct SessionController {
    config: Config,
    extras: Extras,
    host_id: String,
    host: HostBindings,
    bus: SignalBus,
    /// The single content owner; created once in `attach_content`
    content: Option<NotesContent>,
    /// Set once the fullscreen toggle has been inserted into the chrome
    chrome_wired: bool,
    /// Mirrors the host's fullscreen state, driven by enter/exit events
    fullscreen: bool,
    /// One-shot break so an observer-triggered resize cannot cascade
    resize_in_flight: bool,
}

impl SessionController {
    /// Construct from partial host parameters.
    ///
    /// Both records merge over documented defaults; missing fields never
    /// fail construction.
    pub fn new(
        params: ConfigPatch,
        host_id: impl Into<String>,
        extras: ExtrasPatch,
        host: HostBindings,
    ) -> Self {
        Self {
            config: Config::merged(params),
            extras: Extras::merged(extras),
            host_id: host_id.into(),
            host,
            bus: SignalBus::new(),
            content: None,
            chrome_wired: false,
            fullscreen: false,
            resize_in_flight: false,
        }
    }

    /// Merged configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Merged extras
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Host-assigned id for this instance
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// Signal bus, for wiring glue-side observers once at setup
    pub fn bus_mut(&mut self) -> &mut SignalBus {
        &mut self.bus
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Construct the single content owner, seeded from the previous
    /// session's state.
    ///
    /// This is the one construction point; a second call is a defect.
    pub fn attach_content(&mut self) -> &mut NotesContent {
        debug_assert!(self.content.is_none(), "content attached twice");
        self.content
            .get_or_insert_with(|| NotesContent::new(&self.config, &self.extras.previous_state))
    }

    /// The content owner, once attached
    pub fn content(&self) -> Option<&NotesContent> {
        self.content.as_ref()
    }

    /// Mutable content owner, once attached
    pub fn content_mut(&mut self) -> Option<&mut NotesContent> {
        self.content.as_mut()
    }

    /// React to the host's "DOM attached" signal.
    ///
    /// Inserts the fullscreen toggle into the outer chrome at most once.
    /// The signal may fire before the container exists; that firing is a
    /// no-op and a later one completes the wiring. Repeated firings after
    /// wiring are ignored.
    pub fn on_dom_attached(&mut self) {
        if self.chrome_wired {
            return;
        }
        if !self.host.chrome.container_present() {
            return;
        }
        self.host
            .chrome
            .insert_fullscreen_toggle(&self.config.l10n.fullscreen);
        self.chrome_wired = true;
        self.bus.emit(Signal::DomAttached);
    }

    /// Whether the fullscreen toggle has been inserted
    pub fn is_chrome_wired(&self) -> bool {
        self.chrome_wired
    }

    // =========================================================================
    // Fullscreen / resize
    // =========================================================================

    /// Toggle fullscreen. No-op when the environment lacks the
    /// capability. The state flag only changes when the host's
    /// enter/exit events arrive.
    pub fn toggle_fullscreen(&mut self) {
        if !self.host.fullscreen.is_supported() {
            return;
        }
        if self.fullscreen {
            self.host.fullscreen.request_exit();
        } else {
            self.host.fullscreen.request_enter();
        }
    }

    /// Host entered fullscreen: relay to content and refresh layout
    pub fn on_enter_fullscreen(&mut self) {
        self.fullscreen = true;
        if let Some(content) = self.content.as_mut() {
            content.set_fullscreen(true);
        }
        self.bus.emit(Signal::EnterFullscreen);
        self.resize();
    }

    /// Host left fullscreen: relay to content and refresh layout
    pub fn on_exit_fullscreen(&mut self) {
        self.fullscreen = false;
        if let Some(content) = self.content.as_mut() {
            content.set_fullscreen(false);
        }
        self.bus.emit(Signal::ExitFullscreen);
        self.resize();
    }

    /// Current fullscreen state as last reported by the host
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Re-measure and re-lay-out the content, then notify observers.
    ///
    /// A resize arriving while one is already in flight is dropped, so an
    /// observer answering resize with resize cannot loop.
    pub fn resize(&mut self) {
        if self.resize_in_flight {
            return;
        }
        self.resize_in_flight = true;
        if let Some(content) = self.content.as_mut() {
            content.resize();
        }
        let layout = self
            .content
            .as_ref()
            .map(NotesContent::layout)
            .unwrap_or_default();
        self.bus.emit(Signal::Resize { layout });
        self.resize_in_flight = false;
    }

    // =========================================================================
    // Host contract (answer / score / state)
    // =========================================================================

    /// Whether the learner gave an answer. Extension point; this core has
    /// no answer concept.
    pub fn answer_given(&self) -> bool {
        false
    }

    /// Current score. The widget is unscored by design.
    pub fn score(&self) -> i32 {
        0
    }

    /// Maximum score. The widget is unscored by design.
    pub fn max_score(&self) -> i32 {
        0
    }

    /// An unscored task is trivially passed
    pub fn is_passed(&self) -> bool {
        true
    }

    /// No solution concept exists; refresh the layout only
    pub fn show_solutions(&mut self) {
        self.resize();
    }

    /// Extension point for clearing the content's fields; no-op here
    pub fn reset_task(&mut self) {}

    /// Live state of the three regions. Never fails: before attachment,
    /// or before any edit, this is the empty snapshot.
    pub fn current_state(&self) -> NotesSnapshot {
        self.content
            .as_ref()
            .map(NotesContent::current_state)
            .unwrap_or_default()
    }

    /// Push a live edit into a region (called by the glue on input events)
    pub fn set_region_text(&mut self, region: RegionKind, text: &str) {
        if let Some(content) = self.content.as_mut() {
            content.set_text(region, text);
        }
    }

    /// Display title: extras metadata if set, else the fixed default,
    /// passed through the host's sanitizer
    pub fn title(&self) -> String {
        let raw = self
            .extras
            .metadata
            .title
            .as_deref()
            .unwrap_or(DEFAULT_TITLE);
        self.host.titles.sanitize(raw)
    }

    /// Task description: configured instructions if present, else the
    /// fixed default
    pub fn description(&self) -> String {
        if self.config.instructions.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            self.config.instructions.clone()
        }
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Activity definition for reporting statements
    pub fn xapi_definition(&self) -> Definition {
        Definition::new(&self.title(), &self.description())
    }

    /// Template a reporting event for an arbitrary verb
    pub fn build_event(&self, verb: &str) -> XapiEvent {
        XapiEvent::template(verb, self.xapi_definition())
    }

    /// The "answered" event with the scored result block
    pub fn build_answer_event(&self) -> XapiEvent {
        let mut event = self.build_event("answered");
        event.set_scored_result(self.score(), self.max_score(), true, self.is_passed());
        event
    }

    /// The inner statement of the "answered" event
    pub fn xapi_data(&self) -> XapiStatement {
        self.build_answer_event().statement
    }
}
