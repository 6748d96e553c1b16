//! Enhancement Configuration
//!
//! Selector-to-behavior bindings and timings, overridable from an embedded
//! JSON block in the host page.

use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` config block
pub const CONFIG_ELEMENT_ID: &str = "eventsphere-config";

/// Selectors, endpoints and timings consumed by `enhance::init`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Elements handed to the widget adapter for tooltip behavior
    pub tooltip_selector: String,
    /// Forms whose `input[name="q"]` submits on Enter
    pub search_form_selector: String,
    /// Placeholders that receive a mounted favorite button
    pub favorite_selector: String,
    /// Forms validated client-side before submit
    pub validated_form_selector: String,
    /// Elements that copy their `data-copy-link` value on click
    pub copy_selector: String,
    /// Alerts scheduled for auto-removal
    pub alert_selector: String,
    /// Same-page anchor links given smooth scrolling
    pub anchor_selector: String,
    /// Prefix of the favorite toggle endpoint; event id is appended
    pub favorite_endpoint: String,
    /// Name of the anti-forgery token cookie
    pub csrf_cookie: String,
    /// How long alerts stay visible before fading, in ms
    pub alert_linger_ms: u32,
    /// Duration of the alert opacity fade, in ms
    pub alert_fade_ms: u32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            tooltip_selector: "[data-bs-toggle=\"tooltip\"]".to_string(),
            search_form_selector: "form[action*=\"search\"]".to_string(),
            favorite_selector: ".favorite-btn".to_string(),
            validated_form_selector: "form[data-validate]".to_string(),
            copy_selector: "[data-copy-link]".to_string(),
            alert_selector: ".alert".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            favorite_endpoint: "/events/favorite".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            alert_linger_ms: 5000,
            alert_fade_ms: 500,
        }
    }
}

impl EnhanceConfig {
    /// Parse a config override block; unknown fields are ignored,
    /// missing fields fall back to defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read the config block embedded in the page, if any
    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, err)
                        .into(),
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnhanceConfig::default();
        assert_eq!(config.favorite_selector, ".favorite-btn");
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.alert_linger_ms, 5000);
        assert_eq!(config.alert_fade_ms, 500);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            EnhanceConfig::from_json(r#"{"favorite_endpoint": "/api/favorites", "alert_linger_ms": 3000}"#)
                .unwrap();
        assert_eq!(config.favorite_endpoint, "/api/favorites");
        assert_eq!(config.alert_linger_ms, 3000);
        // untouched fields fall back to defaults
        assert_eq!(config.alert_fade_ms, 500);
        assert_eq!(config.favorite_selector, ".favorite-btn");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = EnhanceConfig::from_json("{}").unwrap();
        assert_eq!(config, EnhanceConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(EnhanceConfig::from_json("not json").is_err());
    }
}
