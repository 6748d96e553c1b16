//! Form Validation
//!
//! Synchronous required/email checks with inline error rendering.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

const INVALID_CLASS: &str = "is-invalid";
const FEEDBACK_SELECTOR: &str = ".invalid-feedback";

/// Simple `local@domain.tld` check: exactly one `@`, non-empty local part,
/// a dot inside the domain with characters on both sides, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + '.'.len_utf8() < domain.len())
}

/// Check one required field value, returning the error message if invalid
pub fn check_field(value: &str, is_email: bool) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    if is_email && !is_valid_email(value) {
        return Some(EMAIL_MESSAGE);
    }
    None
}

/// Validate every `[required]` element of a form in a single pass.
///
/// Invalid fields get a marker class and one adjacent error node, replacing
/// any prior one; valid fields have both removed. Returns true iff all pass.
pub fn validate_form(form: &HtmlFormElement) -> bool {
    let Some(document) = form.owner_document() else {
        return true;
    };
    let Ok(fields) = form.query_selector_all("[required]") else {
        return true;
    };

    let mut all_valid = true;
    for i in 0..fields.length() {
        let Some(field) = fields.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some((value, is_email)) = field_value(&field) else {
            continue;
        };
        match check_field(&value, is_email) {
            Some(message) => {
                show_field_error(&document, &field, message);
                all_valid = false;
            }
            None => clear_field_error(&field),
        }
    }
    all_valid
}

fn field_value(field: &Element) -> Option<(String, bool)> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some((input.value(), input.type_() == "email"));
    }
    if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.value(), false));
    }
    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        return Some((select.value(), false));
    }
    None
}

/// Mark a field invalid with exactly one adjacent error message node
pub fn show_field_error(document: &Document, field: &Element, message: &str) {
    clear_field_error(field);
    let _ = field.class_list().add_1(INVALID_CLASS);
    let Some(parent) = field.parent_element() else {
        return;
    };
    let Ok(error) = document.create_element("div") else {
        return;
    };
    error.set_class_name("invalid-feedback");
    error.set_text_content(Some(message));
    let _ = parent.append_child(&error);
}

/// Remove the invalid marker and any error message node for a field
pub fn clear_field_error(field: &Element) {
    let _ = field.class_list().remove_1(INVALID_CLASS);
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(prior)) = parent.query_selector(FEEDBACK_SELECTOR) {
            prior.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user+tag@example.co"));
    }

    #[test]
    fn test_rejects_missing_dot_in_domain() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
    }

    #[test]
    fn test_rejects_whitespace_and_bad_at_signs() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_required_check_trims_whitespace() {
        assert_eq!(check_field("", false), Some(REQUIRED_MESSAGE));
        assert_eq!(check_field("   \t", false), Some(REQUIRED_MESSAGE));
        assert_eq!(check_field("x", false), None);
    }

    #[test]
    fn test_email_check_applies_after_required() {
        assert_eq!(check_field("", true), Some(REQUIRED_MESSAGE));
        assert_eq!(check_field("a@b", true), Some(EMAIL_MESSAGE));
        assert_eq!(check_field("a@b.com", true), None);
    }
}
