//! Page Enhancement Bootstrapper
//!
//! Explicit wiring of behaviors onto a root container. The host calls
//! `init` once; elements missing from the page are silently a no-op.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::clipboard;
use crate::components::FavoriteButton;
use crate::config::EnhanceConfig;
use crate::toast::Toaster;
use crate::validate;
use crate::widgets::WidgetLibrary;
use crate::api;

/// Attach every configured behavior under `root`
pub fn init(root: &HtmlElement, config: &EnhanceConfig, widgets: Rc<dyn WidgetLibrary>) {
    let toaster = Toaster::new(Rc::clone(&widgets));

    attach_tooltips(root, config, widgets.as_ref());
    bind_search_forms(root, config);
    bind_favorite_buttons(root, config, &toaster);
    bind_validated_forms(root, config);
    bind_copy_links(root, config, &toaster);
    schedule_alert_auto_hide(root, config);
    bind_anchor_scrolling(root, config);
}

/// Collect all elements under `root` matching a selector
fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn attach_tooltips(root: &Element, config: &EnhanceConfig, widgets: &dyn WidgetLibrary) {
    for element in select_all(root, &config.tooltip_selector) {
        widgets.attach_tooltip(&element);
    }
}

/// Submit search forms when Enter is pressed in their query input
fn bind_search_forms(root: &Element, config: &EnhanceConfig) {
    for element in select_all(root, &config.search_form_selector) {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let Ok(Some(input)) = form.query_selector("input[name=\"q\"]") else {
            continue;
        };
        let target = form.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                if let Err(err) = target.submit() {
                    web_sys::console::error_1(&err);
                }
            }
        });
        let _ = input.add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref());
        on_key.forget();
    }
}

/// Mount a favorite button island into each placeholder.
///
/// A placeholder without an event id is a caller error: it is skipped with
/// a console warning rather than bound with undefined behavior.
fn bind_favorite_buttons(root: &Element, config: &EnhanceConfig, toaster: &Toaster) {
    for element in select_all(root, &config.favorite_selector) {
        let Some(event_id) = element.get_attribute("data-event-id").filter(|id| !id.is_empty())
        else {
            web_sys::console::warn_1(&"favorite control without data-event-id, skipping".into());
            continue;
        };
        let initially_favorite = element.get_attribute("data-is-favorite").as_deref() == Some("true");
        let Ok(host) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        // drop the server-rendered fallback content
        host.set_inner_html("");

        let url = api::favorite_url(&config.favorite_endpoint, &event_id);
        let csrf_cookie = config.csrf_cookie.clone();
        let toaster = toaster.clone();
        mount_to(host, move || {
            view! {
                <FavoriteButton
                    url=url
                    csrf_cookie=csrf_cookie
                    initially_favorite=initially_favorite
                    toaster=toaster
                />
            }
        })
        .forget();
    }
}

/// Block submission of opted-in forms that fail client-side validation
fn bind_validated_forms(root: &Element, config: &EnhanceConfig) {
    for element in select_all(root, &config.validated_form_selector) {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let checked = form.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if !validate::validate_form(&checked) {
                ev.prevent_default();
            }
        });
        let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }
}

fn bind_copy_links(root: &Element, config: &EnhanceConfig, toaster: &Toaster) {
    for element in select_all(root, &config.copy_selector) {
        let source = element.clone();
        let toaster = toaster.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            // read at click time; the attribute may have been rewritten
            let Some(text) = source.get_attribute("data-copy-link").filter(|t| !t.is_empty())
            else {
                return;
            };
            clipboard::copy_link(text, toaster.clone());
        });
        let _ = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Fade out and detach every alert present at init after a fixed delay.
/// Liveness is checked before each step so earlier removal is a no-op.
fn schedule_alert_auto_hide(root: &Element, config: &EnhanceConfig) {
    for element in select_all(root, &config.alert_selector) {
        let Ok(alert) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let fade_ms = config.alert_fade_ms;
        Timeout::new(config.alert_linger_ms, move || {
            if !alert.is_connected() {
                return;
            }
            let style = alert.style();
            let _ = style.set_property("transition", &format!("opacity {}ms", fade_ms));
            let _ = style.set_property("opacity", "0");
            Timeout::new(fade_ms, move || {
                if alert.is_connected() {
                    alert.remove();
                }
            })
            .forget();
        })
        .forget();
    }
}

/// Resolve an anchor href into a same-page target selector
pub(crate) fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(href)
    }
}

fn bind_anchor_scrolling(root: &Element, config: &EnhanceConfig) {
    for link in select_all(root, &config.anchor_selector) {
        let source = link.clone();
        let scope = root.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = scope.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#details"), Some("#details"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/events/"), None);
        assert_eq!(anchor_target(""), None);
    }
}
