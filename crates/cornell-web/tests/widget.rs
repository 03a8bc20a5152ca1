//! Browser-side tests for the widget's DOM wiring.
//!
//! Run with `wasm-pack test --headless --chrome crates/cornell-web`.

#![cfg(target_arch = "wasm32")]

use cornell_web::CornellNotes;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const TOGGLE_CLASS: &str = "cornell-notes__fullscreen-toggle";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A fresh container attached to the page body. The chrome refuses to
/// insert the toggle into a detached container, so tests must mount it.
fn mounted_container() -> HtmlElement {
    let document = document();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn keydown(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

#[wasm_bindgen_test]
fn toggle_is_inserted_once_across_repeated_attach_signals() {
    let container = mounted_container();
    let mut widget = CornellNotes::new(container.clone(), "", "w1", "").unwrap();
    widget.attach().unwrap();

    widget.on_dom_attached();
    widget.on_dom_attached();

    let toggles = container.get_elements_by_class_name(TOGGLE_CLASS);
    assert_eq!(toggles.length(), 1);
}

#[wasm_bindgen_test]
fn space_on_toggle_suppresses_scroll_default() {
    let container = mounted_container();
    let mut widget = CornellNotes::new(container.clone(), "", "w2", "").unwrap();
    widget.attach().unwrap();

    let toggle: HtmlElement = container
        .get_elements_by_class_name(TOGGLE_CLASS)
        .item(0)
        .unwrap()
        .dyn_into()
        .unwrap();

    // dispatch_event returns false exactly when a listener prevented the
    // default, so Space must come back false and the rest true
    assert!(!toggle.dispatch_event(&keydown(" ")).unwrap());
    assert!(toggle.dispatch_event(&keydown("Enter")).unwrap());
    assert!(toggle.dispatch_event(&keydown("Escape")).unwrap());
}

#[wasm_bindgen_test]
fn wide_container_gets_two_column_class() {
    let container = mounted_container();
    container.style().set_property("width", "1024px").unwrap();
    let mut widget = CornellNotes::new(container.clone(), "", "w3", "").unwrap();
    widget.attach().unwrap();

    widget.resize();

    let wrappers = container.get_elements_by_class_name("cornell-notes--wide");
    assert_eq!(wrappers.length(), 1);
}
