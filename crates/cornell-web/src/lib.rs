//! Browser glue for the Cornell Notes widget
//!
//! This crate binds the pure session core to the DOM: it renders the
//! three editable regions, injects the fullscreen toggle into the host's
//! question chrome, relays fullscreen-change and resize events, and
//! exports the host contract over wasm-bindgen.
//!
//! All state lives in [`cornell_core::SessionController`]; this crate
//! only translates DOM events into core calls and core state into DOM.

mod dom;
mod fullscreen;

use std::cell::RefCell;
use std::rc::Rc;

use cornell_core::{HostBindings, RegionKind, SessionController, Signal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlElement, HtmlTextAreaElement};

pub use dom::{DomChrome, DomTitle};
pub use fullscreen::{is_activation_key, suppresses_default, WebFullscreen};

/// The widget as exposed to the hosting page
#[wasm_bindgen]
pub struct CornellNotes {
    session: Rc<RefCell<SessionController>>,
    document: Document,
    container: HtmlElement,
    /// Mount wrapper; also the fullscreen target
    wrapper: HtmlElement,
    /// Content root, present after `attach`
    content_root: Option<HtmlElement>,
    /// Slot the chrome publishes the inserted toggle through
    toggle_slot: Rc<RefCell<Option<HtmlElement>>>,
    toggle_wired: bool,
    /// Event closures kept alive for the widget's lifetime
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl CornellNotes {
    /// Construct the widget inside the host's container.
    ///
    /// `params_json` and `extras_json` are the host's parameter records;
    /// absent or malformed JSON falls back to defaults, never a throw.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        params_json: &str,
        content_id: &str,
        extras_json: &str,
    ) -> Result<CornellNotes, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let wrapper: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(JsValue::from)?;
        wrapper.set_class_name("cornell-notes");

        let toggle_slot = Rc::new(RefCell::new(None));
        let bindings = HostBindings {
            fullscreen: Box::new(WebFullscreen::new(document.clone(), wrapper.clone())),
            titles: Box::new(DomTitle::new(document.clone())),
            chrome: Box::new(DomChrome::new(
                document.clone(),
                container.clone(),
                toggle_slot.clone(),
            )),
        };

        let session = Rc::new(RefCell::new(SessionController::new(
            parse_or_default(params_json, "params"),
            content_id,
            parse_or_default(extras_json, "extras"),
            bindings,
        )));

        let mut widget = CornellNotes {
            session,
            document,
            container,
            wrapper,
            content_root: None,
            toggle_slot,
            toggle_wired: false,
            listeners: Vec::new(),
        };
        widget.wire_layout_sync();
        widget.wire_fullscreen_change()?;
        Ok(widget)
    }

    /// Render the content into the container. Invoked once by the host
    /// when it is ready to receive the widget's DOM; a repeated call is
    /// ignored.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.content_root.is_some() {
            console::warn_1(&JsValue::from_str("cornell-notes: attach called twice"));
            return Ok(());
        }

        let fields = {
            let mut session = self.session.borrow_mut();
            let instructions = session.config().instructions.clone();
            let content = session.attach_content();
            dom::build_content(&self.document, content, &instructions)?
        };

        self.wire_region(&fields.recall, RegionKind::Recall)?;
        self.wire_region(&fields.notes, RegionKind::Notes)?;
        self.wire_region(&fields.summary, RegionKind::Summary)?;

        self.wrapper.append_child(&fields.root)?;
        self.container.append_child(&self.wrapper)?;
        self.content_root = Some(fields.root);

        // Chrome wiring may already be possible now that we are in the DOM
        self.on_dom_attached();
        self.resize();
        Ok(())
    }

    /// Relay of the host's "DOM attached" signal. Safe to call any number
    /// of times; the toggle is inserted and wired at most once.
    pub fn on_dom_attached(&mut self) {
        self.session.borrow_mut().on_dom_attached();
        self.wire_toggle();
    }

    /// Host-driven resize: re-measure the container and re-lay-out
    pub fn resize(&mut self) {
        let width = self.container.client_width() as f32;
        let mut session = self.session.borrow_mut();
        if let Some(content) = session.content_mut() {
            content.set_measured_width(width);
        }
        session.resize();
    }

    /// Toggle fullscreen on the mount wrapper
    pub fn toggle_fullscreen(&mut self) {
        self.session.borrow_mut().toggle_fullscreen();
    }

    // =========================================================================
    // Host contract
    // =========================================================================

    /// Always false; the widget has no answer concept
    pub fn get_answer_given(&self) -> bool {
        self.session.borrow().answer_given()
    }

    /// Always 0; the widget is unscored
    pub fn get_score(&self) -> i32 {
        self.session.borrow().score()
    }

    /// Always 0; the widget is unscored
    pub fn get_max_score(&self) -> i32 {
        self.session.borrow().max_score()
    }

    /// Always true; an unscored task is trivially passed
    pub fn is_passed(&self) -> bool {
        self.session.borrow().is_passed()
    }

    /// Layout refresh only; no solutions exist
    pub fn show_solutions(&mut self) {
        self.session.borrow_mut().show_solutions();
    }

    /// Extension point; currently a no-op
    pub fn reset_task(&mut self) {
        self.session.borrow_mut().reset_task();
    }

    /// Sanitized display title
    pub fn get_title(&self) -> String {
        self.session.borrow().title()
    }

    /// Task description
    pub fn get_description(&self) -> String {
        self.session.borrow().description()
    }

    /// Live `{recall, notes, summary}` state as JSON
    pub fn get_current_state(&self) -> String {
        serde_json::to_string(&self.session.borrow().current_state())
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// The "answered" reporting statement as JSON
    pub fn get_xapi_data(&self) -> String {
        serde_json::to_string(&self.session.borrow().xapi_data())
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl CornellNotes {
    /// Subscribe the wrapper's class list to resize signals. The signal
    /// carries the resulting layout mode, so this observer never reaches
    /// back into the controller it is notified by.
    fn wire_layout_sync(&mut self) {
        let wrapper = self.wrapper.clone();
        self.session.borrow_mut().bus_mut().subscribe(move |signal, _| {
            if let Signal::Resize { layout } = signal {
                dom::apply_layout(&wrapper, layout);
            }
        });
    }

    /// Relay browser fullscreen transitions into the core.
    fn wire_fullscreen_change(&mut self) -> Result<(), JsValue> {
        let session = self.session.clone();
        let document = self.document.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut session = session.borrow_mut();
            if document.fullscreen_element().is_some() {
                session.on_enter_fullscreen();
            } else {
                session.on_exit_fullscreen();
            }
        });
        self.document
            .add_event_listener_with_callback("fullscreenchange", closure.as_ref().unchecked_ref())?;
        self.listeners.push(closure);
        Ok(())
    }

    /// Push every input edit into the core so state queries stay live.
    fn wire_region(&mut self, field: &HtmlTextAreaElement, kind: RegionKind) -> Result<(), JsValue> {
        let session = self.session.clone();
        let source = field.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            session.borrow_mut().set_region_text(kind, &source.value());
        });
        field.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        self.listeners.push(closure);
        Ok(())
    }

    /// Wire click and keyboard activation on the inserted toggle.
    ///
    /// Keyboard activation (Enter or Space) must behave exactly like a
    /// click; Space additionally suppresses the page-scroll default.
    fn wire_toggle(&mut self) {
        if self.toggle_wired {
            return;
        }
        let toggle = match self.toggle_slot.borrow().clone() {
            Some(toggle) => toggle,
            None => return,
        };

        let session = self.session.clone();
        let click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            session.borrow_mut().toggle_fullscreen();
        });
        let session = self.session.clone();
        let keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let key_event = match event.dyn_ref::<web_sys::KeyboardEvent>() {
                Some(key_event) => key_event,
                None => return,
            };
            let key = key_event.key();
            if !is_activation_key(&key) {
                return;
            }
            if suppresses_default(&key) {
                key_event.prevent_default();
            }
            session.borrow_mut().toggle_fullscreen();
        });

        let wired = toggle
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
            .and_then(|_| {
                toggle.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            });
        match wired {
            Ok(()) => {
                self.listeners.push(click);
                self.listeners.push(keydown);
                self.toggle_wired = true;
            }
            Err(err) => console::warn_1(&err),
        }
    }
}

/// Parse a host JSON record, falling back to defaults on absence or
/// malformed input. The host contract has no error channel for these.
fn parse_or_default<T: Default + serde::de::DeserializeOwned>(json: &str, what: &str) -> T {
    if json.trim().is_empty() {
        return T::default();
    }
    match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            console::warn_1(&JsValue::from_str(&format!(
                "cornell-notes: ignoring malformed {what}: {err}"
            )));
            T::default()
        }
    }
}
