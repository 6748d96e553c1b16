//! Frontend Models
//!
//! Payload shapes exchanged with the EventSphere backend.

use serde::Deserialize;

/// Response body of the favorite toggle endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteResponse {
    /// Server-confirmed favorite state
    pub is_favorite: bool,
    /// Human-readable outcome message, shown as a toast
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_response_shape() {
        let response: FavoriteResponse =
            serde_json::from_str(r#"{"is_favorite": true, "message": "Added"}"#).unwrap();
        assert!(response.is_favorite);
        assert_eq!(response.message, "Added");
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        assert!(serde_json::from_str::<FavoriteResponse>(r#"{"message": "Added"}"#).is_err());
        assert!(serde_json::from_str::<FavoriteResponse>("{}").is_err());
    }
}
