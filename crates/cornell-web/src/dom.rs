//! DOM construction for the Cornell layout and the question chrome
//!
//! Builds the instructions block, the recall column beside the notes
//! area, and the summary area below, all as plain elements styled by
//! class. The fullscreen toggle is a `role="button"` element so that
//! keyboard activation is wired explicitly and never doubles up with a
//! native button's synthesized click.

use std::cell::RefCell;
use std::rc::Rc;

use cornell_core::content::LayoutMode;
use cornell_core::{NotesContent, RegionKind, TitleSanitizer, WidgetChrome};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, HtmlElement, HtmlTextAreaElement};

/// Class applied to the mount wrapper when the recall column sits beside
/// the notes area
const WIDE_CLASS: &str = "cornell-notes--wide";

/// The rendered editable fields, handed back for event wiring
pub struct RegionFields {
    pub root: HtmlElement,
    pub recall: HtmlTextAreaElement,
    pub notes: HtmlTextAreaElement,
    pub summary: HtmlTextAreaElement,
}

/// Build the full content DOM from the attached content owner.
pub fn build_content(
    document: &Document,
    content: &NotesContent,
    instructions: &str,
) -> Result<RegionFields, JsValue> {
    let root = create_div(document, "cornell-notes__content")?;

    if !instructions.is_empty() {
        let block = create_div(document, "cornell-notes__instructions")?;
        block.set_text_content(Some(instructions));
        root.append_child(&block)?;
    }

    let row = create_div(document, "cornell-notes__row")?;
    let recall = build_region(document, content, RegionKind::Recall, "recall", &row)?;
    let notes = build_region(document, content, RegionKind::Notes, "notes", &row)?;
    root.append_child(&row)?;

    let summary = build_region(document, content, RegionKind::Summary, "summary", &root)?;

    Ok(RegionFields {
        root,
        recall,
        notes,
        summary,
    })
}

/// Build one titled region and append it to `parent`.
fn build_region(
    document: &Document,
    content: &NotesContent,
    kind: RegionKind,
    modifier: &str,
    parent: &Element,
) -> Result<HtmlTextAreaElement, JsValue> {
    let region = content.region(kind);

    let section = create_div(document, &format!("cornell-notes__section cornell-notes__section--{modifier}"))?;

    let heading = create_div(document, "cornell-notes__section-title")?;
    heading.set_text_content(Some(&region.title));
    section.append_child(&heading)?;

    let field: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(JsValue::from)?;
    field.set_class_name("cornell-notes__field");
    field.set_rows(region.rows);
    field.set_placeholder(&region.placeholder);
    field.set_value(region.text());
    section.append_child(&field)?;

    parent.append_child(&section)?;
    Ok(field)
}

/// Reflect the content's layout mode onto the mount wrapper's class list.
pub fn apply_layout(wrapper: &HtmlElement, layout: LayoutMode) {
    let class = match layout {
        LayoutMode::TwoColumn => format!("cornell-notes {WIDE_CLASS}"),
        LayoutMode::Stacked => "cornell-notes".to_string(),
    };
    wrapper.set_class_name(&class);
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(JsValue::from)?;
    element.set_class_name(class);
    Ok(element)
}

/// Question chrome backed by the host's outer container.
///
/// The inserted toggle is published through a shared slot so the glue can
/// wire its listeners after insertion.
pub struct DomChrome {
    document: Document,
    container: HtmlElement,
    button: Rc<RefCell<Option<HtmlElement>>>,
}

impl DomChrome {
    pub fn new(
        document: Document,
        container: HtmlElement,
        button: Rc<RefCell<Option<HtmlElement>>>,
    ) -> Self {
        Self {
            document,
            container,
            button,
        }
    }
}

impl WidgetChrome for DomChrome {
    fn container_present(&self) -> bool {
        self.container.is_connected()
    }

    fn insert_fullscreen_toggle(&mut self, label: &str) {
        let toggle = match create_div(&self.document, "cornell-notes__fullscreen-toggle") {
            Ok(element) => element,
            Err(err) => {
                console::warn_1(&err);
                return;
            }
        };
        let wired = toggle
            .set_attribute("role", "button")
            .and_then(|_| toggle.set_attribute("tabindex", "0"))
            .and_then(|_| toggle.set_attribute("aria-label", label))
            .and_then(|_| {
                self.container
                    .insert_before(&toggle, self.container.first_child().as_ref())
                    .map(|_| ())
            });
        match wired {
            Ok(()) => *self.button.borrow_mut() = Some(toggle),
            Err(err) => console::warn_1(&err),
        }
    }
}

/// Title sanitization by round-tripping markup through a detached element
pub struct DomTitle {
    document: Document,
}

impl DomTitle {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl TitleSanitizer for DomTitle {
    fn sanitize(&self, raw: &str) -> String {
        match self.document.create_element("div") {
            Ok(scratch) => {
                scratch.set_inner_html(raw);
                scratch.text_content().unwrap_or_default().trim().to_string()
            }
            Err(_) => raw.trim().to_string(),
        }
    }
}
