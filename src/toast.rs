//! Toast Notifier
//!
//! Renders self-dismissing notification widgets into a lazily created,
//! shared region. Removal is wired to the widget adapter's hidden signal.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::widgets::WidgetLibrary;

const REGION_SELECTOR: &str = ".toast-container";

/// Notification severity, mapped to a visual treatment
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Background class: error gets danger styling, anything else success
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Error => "bg-danger",
            _ => "bg-success",
        }
    }
}

/// Handle for showing toast notifications
#[derive(Clone)]
pub struct Toaster {
    widgets: Rc<dyn WidgetLibrary>,
    seq: Rc<Cell<u64>>,
}

impl Toaster {
    pub fn new(widgets: Rc<dyn WidgetLibrary>) -> Self {
        Self {
            widgets,
            seq: Rc::new(Cell::new(0)),
        }
    }

    /// Render a dismissible notification; it is removed from the document
    /// once the widget reports it hidden
    pub fn notify(&self, message: &str, severity: Severity) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(region) = get_or_create_region(&document) else {
            return;
        };

        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let id = toast_id(js_sys::Date::now(), seq);

        let Some(toast) = build_toast(&document, &id, message, severity) else {
            return;
        };
        if region.append_child(&toast).is_err() {
            return;
        }
        let Ok(toast) = toast.dyn_into::<HtmlElement>() else {
            return;
        };

        let removed = toast.clone();
        self.widgets.show_toast(&toast, Box::new(move || removed.remove()));
    }
}

/// Time-based unique toast id; the sequence number disambiguates
/// notifications created within the same millisecond
fn toast_id(now_ms: f64, seq: u64) -> String {
    format!("toast-{}-{}", now_ms as u64, seq)
}

/// Reuse the shared notification region, creating it on first use
fn get_or_create_region(document: &Document) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(REGION_SELECTOR) {
        return Some(existing);
    }
    let region = document.create_element("div").ok()?;
    region.set_class_name("toast-container position-fixed top-0 end-0 p-3");
    if let Some(html) = region.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("z-index", "1055");
    }
    document.body()?.append_child(&region).ok()?;
    Some(region)
}

fn build_toast(
    document: &Document,
    id: &str,
    message: &str,
    severity: Severity,
) -> Option<Element> {
    let toast = document.create_element("div").ok()?;
    toast.set_id(id);
    toast.set_class_name(&format!(
        "toast align-items-center text-white {} border-0",
        severity.css_class()
    ));
    let _ = toast.set_attribute("role", "alert");

    let flex = document.create_element("div").ok()?;
    flex.set_class_name("d-flex");

    // text content, not innerHTML: server messages are displayed verbatim
    let body = document.create_element("div").ok()?;
    body.set_class_name("toast-body");
    body.set_text_content(Some(message));

    let close = document.create_element("button").ok()?;
    close.set_class_name("btn-close btn-close-white me-2 m-auto");
    let _ = close.set_attribute("type", "button");
    let _ = close.set_attribute("data-dismiss", "toast");

    flex.append_child(&body).ok()?;
    flex.append_child(&close).ok()?;
    toast.append_child(&flex).ok()?;
    Some(toast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_styling() {
        assert_eq!(Severity::Error.css_class(), "bg-danger");
        assert_eq!(Severity::Success.css_class(), "bg-success");
        assert_eq!(Severity::Info.css_class(), "bg-success");
    }

    #[test]
    fn test_toast_ids_are_unique_within_a_millisecond() {
        let a = toast_id(1700000000000.0, 0);
        let b = toast_id(1700000000000.0, 1);
        assert_ne!(a, b);
        assert!(a.starts_with("toast-1700000000000"));
    }
}
