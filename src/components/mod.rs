//! UI Components
//!
//! Leptos islands mounted over server-rendered placeholders.

mod favorite_button;

pub use favorite_button::FavoriteButton;
