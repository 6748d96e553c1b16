//! Cookie Reader
//!
//! Pure lookup of named cookie values, used for the anti-forgery token.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Find a cookie by exact name in a raw cookie jar string.
///
/// Handles whitespace around separators and percent-encoded values.
/// Returns `None` (never an empty string) when the name is absent.
pub fn find_cookie(jar: &str, name: &str) -> Option<String> {
    if jar.is_empty() || name.is_empty() {
        return None;
    }
    for pair in jar.split(';') {
        let Some(value) = pair.trim().strip_prefix(name).and_then(|rest| rest.strip_prefix('='))
        else {
            continue;
        };
        return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
    }
    None
}

/// Read a named cookie from `document.cookie`
pub fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let jar = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    find_cookie(&jar, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_decoded_value() {
        let jar = "a=1; csrftoken=abc%20def";
        assert_eq!(find_cookie(jar, "csrftoken"), Some("abc def".to_string()));
        assert_eq!(find_cookie(jar, "a"), Some("1".to_string()));
    }

    #[test]
    fn test_empty_jar() {
        assert_eq!(find_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_absent_name() {
        assert_eq!(find_cookie("a=1; b=2", "csrftoken"), None);
    }

    #[test]
    fn test_name_is_not_a_prefix_match() {
        // "csrf" must not match "csrftoken"
        assert_eq!(find_cookie("csrftoken=abc", "csrf"), None);
        // and the longer name still resolves when a shorter one exists
        assert_eq!(
            find_cookie("csrftokenx=1; csrftoken=2", "csrftoken"),
            Some("2".to_string())
        );
    }

    #[test]
    fn test_empty_value_is_some_empty() {
        assert_eq!(find_cookie("empty=; other=x", "empty"), Some(String::new()));
    }

    #[test]
    fn test_whitespace_around_separators() {
        assert_eq!(
            find_cookie("  a=1 ;   csrftoken=tok  ", "csrftoken"),
            Some("tok".to_string())
        );
    }
}
