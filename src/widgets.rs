//! Widget Capability
//!
//! Injected adapter for the visual widget layer (tooltips, toast reveal/hide).
//! The default implementation drives CSS transitions directly; a host using
//! a component framework supplies its own adapter instead.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement};

/// Animated widget layer the enhancement script delegates to
pub trait WidgetLibrary {
    /// Attach tooltip behavior to an annotated element
    fn attach_tooltip(&self, element: &Element);

    /// Reveal a toast element and invoke `on_hidden` exactly once after its
    /// hide animation completes. The widget owns dismissal timing, including
    /// the close button inside the element.
    fn show_toast(&self, element: &HtmlElement, on_hidden: Box<dyn FnOnce()>);
}

/// Default adapter based on plain CSS class transitions
pub struct CssWidgets {
    /// How long a toast stays revealed before hiding, in ms
    pub toast_visible_ms: u32,
    /// Duration of the toast hide transition, in ms
    pub toast_fade_ms: u32,
}

impl Default for CssWidgets {
    fn default() -> Self {
        Self {
            toast_visible_ms: 5000,
            toast_fade_ms: 500,
        }
    }
}

impl WidgetLibrary for CssWidgets {
    fn attach_tooltip(&self, element: &Element) {
        // native title tooltips; an existing title wins
        if element.get_attribute("title").is_some() {
            return;
        }
        if let Some(text) = element
            .get_attribute("data-tooltip")
            .or_else(|| element.get_attribute("data-bs-title"))
        {
            let _ = element.set_attribute("title", &text);
        }
    }

    fn show_toast(&self, element: &HtmlElement, on_hidden: Box<dyn FnOnce()>) {
        let on_hidden = Rc::new(RefCell::new(Some(on_hidden)));

        // reveal on the next tick so the initial state can transition
        {
            let element = element.clone();
            Timeout::new(10, move || {
                let _ = element.class_list().add_1("show");
            })
            .forget();
        }

        let fade_ms = self.toast_fade_ms;
        let hide: Rc<dyn Fn()> = {
            let element = element.clone();
            Rc::new(move || begin_hide(&element, fade_ms, &on_hidden))
        };

        // the close button dismisses early
        if let Ok(Some(button)) = element.query_selector("[data-dismiss=\"toast\"]") {
            let hide = Rc::clone(&hide);
            let on_click = Closure::<dyn FnMut()>::new(move || hide());
            let _ = button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }

        Timeout::new(self.toast_visible_ms, move || hide()).forget();
    }
}

type HiddenCallback = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

fn begin_hide(element: &HtmlElement, fade_ms: u32, on_hidden: &HiddenCallback) {
    let _ = element.class_list().remove_1("show");

    let finish = {
        let on_hidden = Rc::clone(on_hidden);
        move || {
            if let Some(callback) = on_hidden.borrow_mut().take() {
                callback();
            }
        }
    };

    // the transition end signals "hidden"; a timer backstops elements
    // that have no transition defined
    let transition_finish = finish.clone();
    let on_end = Closure::<dyn FnMut()>::new(move || transition_finish());
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
        "transitionend",
        on_end.as_ref().unchecked_ref(),
        &options,
    );
    on_end.forget();

    Timeout::new(fade_ms + 100, finish).forget();
}
