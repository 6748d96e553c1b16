//! Favorite Button Component
//!
//! Toggle button backed by one POST per click, with update-on-confirm state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::toast::{Severity, Toaster};

pub const TOGGLE_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

const SPINNER_ICON: &str = "fas fa-spinner fa-spin";

/// Icon class and label for a favorite state
pub fn favorite_label(is_favorite: bool) -> (&'static str, &'static str) {
    if is_favorite {
        ("fas fa-heart text-danger", " Remove from Favorites")
    } else {
        ("fas fa-heart", " Add to Favorites")
    }
}

/// Favorite toggle control.
///
/// While a request is outstanding the button is disabled and shows a loading
/// indicator; that disable is the only duplicate-click guard (no in-flight
/// cancellation). The stored flag changes only on a confirmed response, so a
/// failed request renders the exact pre-click content again. The control is
/// re-enabled as the final step on every path.
#[component]
pub fn FavoriteButton(
    /// Fully built toggle URL for this event
    url: String,
    /// Name of the anti-forgery token cookie
    csrf_cookie: String,
    /// Server-rendered initial state
    initially_favorite: bool,
    toaster: Toaster,
) -> impl IntoView {
    let (is_favorite, set_is_favorite) = signal(initially_favorite);
    let (pending, set_pending) = signal(false);

    let toggle = move |_| {
        if pending.get() {
            return;
        }
        set_pending.set(true);
        let url = url.clone();
        let csrf_cookie = csrf_cookie.clone();
        let toaster = toaster.clone();
        spawn_local(async move {
            match api::toggle_favorite(&url, &csrf_cookie).await {
                Ok(response) => {
                    set_is_favorite.set(response.is_favorite);
                    toaster.notify(&response.message, Severity::Success);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("favorite toggle failed: {}", err).into());
                    toaster.notify(TOGGLE_FAILURE_MESSAGE, Severity::Error);
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <button
            type="button"
            class="favorite-btn"
            disabled=move || pending.get()
            data-is-favorite=move || is_favorite.get().to_string()
            on:click=toggle
        >
            {move || {
                let (icon, label) = if pending.get() {
                    (SPINNER_ICON, " Loading...")
                } else {
                    favorite_label(is_favorite.get())
                };
                view! { <i class=icon></i> {label} }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_switches_affordance() {
        let (icon, label) = favorite_label(true);
        assert_eq!(icon, "fas fa-heart text-danger");
        assert_eq!(label, " Remove from Favorites");

        let (icon, label) = favorite_label(false);
        assert_eq!(icon, "fas fa-heart");
        assert_eq!(label, " Add to Favorites");
    }
}
