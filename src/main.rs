//! EventSphere Frontend Entry Point

mod api;
mod clipboard;
mod components;
mod config;
mod cookie;
mod enhance;
mod models;
mod toast;
mod validate;
mod widgets;

use std::rc::Rc;

use config::EnhanceConfig;
use widgets::CssWidgets;

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let config = EnhanceConfig::from_document(&document);
    enhance::init(&body, &config, Rc::new(CssWidgets::default()));
}
