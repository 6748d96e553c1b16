//! Clipboard Helper
//!
//! Copies text via the async Clipboard API with a hidden-textarea fallback.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlTextAreaElement, Window};

use crate::api::js_error_message;
use crate::toast::{Severity, Toaster};

pub const COPY_SUCCESS_MESSAGE: &str = "Link copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy link";

/// Copy `text` to the system clipboard, reporting the outcome as a toast.
/// Fire-and-forget; the caller does not await completion.
pub fn copy_link(text: String, toaster: Toaster) {
    spawn_local(async move {
        match write_clipboard(&text).await {
            Ok(true) => toaster.notify(COPY_SUCCESS_MESSAGE, Severity::Success),
            Ok(false) => toaster.notify(COPY_FAILURE_MESSAGE, Severity::Error),
            Err(err) => {
                web_sys::console::error_1(
                    &format!("clipboard write failed: {}", js_error_message(err, "unknown error"))
                        .into(),
                );
                toaster.notify(COPY_FAILURE_MESSAGE, Severity::Error);
            }
        }
    });
}

async fn write_clipboard(text: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = window.navigator();
    if Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
        let promise = navigator.clipboard().write_text(text);
        if JsFuture::from(promise).await.is_ok() {
            return Ok(true);
        }
        // fall through to the textarea path
    }
    fallback_copy(&window, text)
}

/// Hidden-textarea select-and-copy for hosts without the Clipboard API.
/// The temporary element is removed whatever the exec outcome.
fn fallback_copy(window: &Window, text: &str) -> Result<bool, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.style().set_property("position", "absolute");
    let _ = textarea.style().set_property("left", "-9999px");

    body.append_child(&textarea)?;
    textarea.select();
    let result = exec_copy(&document);
    textarea.remove();
    result
}

fn exec_copy(document: &Document) -> Result<bool, JsValue> {
    let exec = Reflect::get(document.as_ref(), &JsValue::from_str("execCommand"))?;
    let Ok(exec) = exec.dyn_into::<Function>() else {
        return Ok(false);
    };
    let result = exec.call1(document.as_ref(), &JsValue::from_str("copy"))?;
    Ok(result.as_bool().unwrap_or(false))
}
