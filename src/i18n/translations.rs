//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "errorMessages.fileTooLarge")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<String>` containing the translation, or `None` if not found
///
/// Details:
/// - This is the strict primitive: tests use it to make typoed key paths
///   fail loudly instead of falling back.
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Look up a translation, falling back to the key path itself.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Active language translation map
///
/// Output:
/// - Translated string, or the key unchanged when no entry exists
///
/// Details:
/// - The silent fallback matches the production behavior for both
///   languages; misses are logged at debug level only.
pub fn lookup(key: &str, translations: &TranslationMap) -> String {
    if let Some(translation) = translations.get(key) {
        return translation.clone();
    }
    tracing::debug!("Missing translation key: '{}'. Returning key as-is.", key);
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut translations = HashMap::new();
        translations.insert(
            "actions.generateQR".to_string(),
            "Generate QR Code".to_string(),
        );

        assert_eq!(
            translate("actions.generateQR", &translations),
            Some("Generate QR Code".to_string())
        );
        assert_eq!(translate("actions.cancel", &translations), None);
    }

    #[test]
    fn test_lookup_falls_back_to_key() {
        let mut translations = HashMap::new();
        translations.insert("actions.cancel".to_string(), "ยกเลิก".to_string());

        assert_eq!(lookup("actions.cancel", &translations), "ยกเลิก");
        assert_eq!(
            lookup("actions.doesNotExist", &translations),
            "actions.doesNotExist"
        );
    }
}
