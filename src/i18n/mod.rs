//! Internationalization (i18n) module for qrdrop.
//!
//! Two locale catalogs (English and Thai) are embedded at compile time and
//! flattened into dot-notation keys. Lookup is deliberately forgiving: a
//! missing key path is returned unchanged, for both languages, so a typo in
//! a key never breaks the UI. The active language lives in
//! [`crate::state::AppState`] and is toggled by explicit user action; it is
//! not persisted across runs (Thai is the startup default).
//!
//! # Usage
//!
//! ```rust,no_run
//! use qrdrop::i18n;
//! use qrdrop::state::AppState;
//!
//! # let app = AppState::default();
//! let text = i18n::t(&app, "actions.generateQR");
//! let sized = i18n::t_fmt1(&app, "errorMessages.cameraError", "device busy");
//! ```

mod loader;
pub mod translations;

pub use loader::{Catalog, parse_locale_yaml};
pub use translations::{TranslationMap, lookup, translate};

use crate::state::AppState;

/// What: Get a translation for a given key from `AppState`.
///
/// Inputs:
/// - `app`: `AppState` holding the catalog and active language
/// - `key`: Dot-notation key (e.g., "errorMessages.uploadFailed")
///
/// Output:
/// - Translated string, or the key itself when no entry exists
pub fn t(app: &AppState, key: &str) -> String {
    translations::lookup(key, app.translations())
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `app`: `AppState` holding the catalog and active language
/// - `key`: Dot-notation key
/// - `args`: Format arguments (as Display trait objects)
///
/// Output:
/// - Formatted translated string
///
/// Details:
/// - Replaces placeholders in order: first {} gets first arg, etc.
pub fn t_fmt(app: &AppState, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = t(app, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// Get a translation with a single format argument (convenience function).
pub fn t_fmt1<T: std::fmt::Display>(app: &AppState, key: &str, arg: T) -> String {
    t_fmt(app, key, &[&arg])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Language;

    #[test]
    /// What: Unknown key paths come back unchanged in both languages
    ///
    /// - Input: A key that exists in neither catalog
    /// - Output: The key path itself, for Thai and English
    fn i18n_unknown_key_returns_key_for_both_languages() {
        let mut app = AppState::default();
        assert_eq!(app.language, Language::Th);
        assert_eq!(t(&app, "no.such.key"), "no.such.key");
        app.toggle_language();
        assert_eq!(app.language, Language::En);
        assert_eq!(t(&app, "no.such.key"), "no.such.key");
    }

    #[test]
    fn i18n_t_fmt1_substitutes_placeholder() {
        let app = AppState::default();
        let out = t_fmt1(&app, "errorMessages.cameraError", "boom");
        assert!(out.contains("boom"));
        assert!(!out.contains("{}"));
    }

    #[test]
    fn i18n_language_toggle_switches_catalog() {
        let mut app = AppState::default();
        let thai = t(&app, "actions.cancel");
        app.toggle_language();
        let english = t(&app, "actions.cancel");
        assert_ne!(thai, english);
        assert_eq!(english, "Cancel");
    }
}
