//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates an empty test App persisted under the default key.
pub fn test_app() -> App {
    App::new("items")
}

/// Creates a test App already holding `items`.
pub fn app_with(items: &[&str]) -> App {
    let mut app = test_app();
    app.items = items.iter().map(|s| s.to_string()).collect();
    app
}
