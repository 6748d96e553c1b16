//! Backend Requests
//!
//! Fetch wrappers for the EventSphere endpoints.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::cookie;
use crate::models::FavoriteResponse;

/// Build the per-event toggle URL from the configured endpoint prefix
pub fn favorite_url(endpoint: &str, event_id: &str) -> String {
    format!("{}/{}/", endpoint.trim_end_matches('/'), event_id)
}

/// Toggle the favorite state of one event.
///
/// Issues a single POST with the anti-forgery token and ajax marker headers.
/// Any transport failure, non-2xx status or malformed payload is an `Err`.
pub async fn toggle_favorite(url: &str, csrf_cookie: &str) -> Result<FavoriteResponse, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let headers = Headers::new().map_err(|e| js_error_message(e, "header setup failed"))?;
    if let Some(token) = cookie::read_cookie(csrf_cookie) {
        headers
            .set("X-CSRFToken", &token)
            .map_err(|e| js_error_message(e, "header setup failed"))?;
    }
    headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(|e| js_error_message(e, "header setup failed"))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);

    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| js_error_message(e, "request failed"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;
    if !response.ok() {
        return Err(format!("favorite endpoint returned {}", response.status()));
    }

    let json = JsFuture::from(
        response
            .json()
            .map_err(|e| js_error_message(e, "response body unreadable"))?,
    )
    .await
    .map_err(|e| js_error_message(e, "response body unreadable"))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Extract a readable message from a thrown `JsValue`
pub fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_url() {
        assert_eq!(favorite_url("/events/favorite", "42"), "/events/favorite/42/");
        // trailing slash on the prefix is tolerated
        assert_eq!(favorite_url("/events/favorite/", "42"), "/events/favorite/42/");
    }
}
