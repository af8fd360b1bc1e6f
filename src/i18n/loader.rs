//! Locale catalog parsing.
//!
//! Locale files are YAML documents embedded at compile time. Each file
//! carries a single top-level language key whose nested structure is
//! flattened into dot-notation keys:
//!
//! ```yaml
//! en:
//!   errorMessages:
//!     fileTooLarge: "File is larger than 10MB"
//! ```
//!
//! becomes accessible as `errorMessages.fileTooLarge`.

use crate::i18n::translations::TranslationMap;
use crate::state::Language;

/// Embedded English locale file.
const EN_YML: &str = include_str!("../../locales/en.yml");
/// Embedded Thai locale file.
const TH_YML: &str = include_str!("../../locales/th.yml");

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as a string
///
/// Output:
/// - `Result<TranslationMap, String>` containing the flattened translations
///
/// Details:
/// - Expects one top-level key naming the language (e.g., "th:") which is
///   skipped while flattening the nested structure below it.
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = TranslationMap::new();
    if let Some(root) = doc.as_mapping() {
        for (_language_key, language_value) in root {
            flatten_yaml_value(language_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten a YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "errorMessages")
/// - `translations`: Map to populate
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        other => {
            let val_str = other
                .as_str()
                .map(std::string::ToString::to_string)
                .or_else(|| other.as_i64().map(|n| n.to_string()))
                .or_else(|| other.as_f64().map(|n| n.to_string()))
                .or_else(|| other.as_bool().map(|b| b.to_string()))
                .unwrap_or_default();
            translations.insert(prefix.to_string(), val_str);
        }
    }
}

/// Flattened translation maps for both supported languages.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// English translations.
    pub en: TranslationMap,
    /// Thai translations.
    pub th: TranslationMap,
}

impl Catalog {
    /// What: Build the catalog from the embedded locale files.
    ///
    /// Output:
    /// - `Ok(Catalog)` with both languages loaded, or an error naming the
    ///   file that failed to parse.
    pub fn embedded() -> Result<Self, String> {
        let en = parse_locale_yaml(EN_YML).map_err(|e| format!("locales/en.yml: {e}"))?;
        let th = parse_locale_yaml(TH_YML).map_err(|e| format!("locales/th.yml: {e}"))?;
        tracing::debug!(en_keys = en.len(), th_keys = th.len(), "loaded locale catalog");
        Ok(Self { en, th })
    }

    /// Return the translation map for `language`.
    #[must_use]
    pub fn map(&self, language: Language) -> &TranslationMap {
        match language {
            Language::En => &self.en,
            Language::Th => &self.th,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_yaml_flattens_nested_keys() {
        let yaml = r#"
en:
  errorMessages:
    fileTooLarge: "File is larger than 10MB"
  actions:
    cancel: "Cancel"
"#;
        let map = parse_locale_yaml(yaml).expect("test locale YAML should parse");
        assert_eq!(
            map.get("errorMessages.fileTooLarge"),
            Some(&"File is larger than 10MB".to_string())
        );
        assert_eq!(map.get("actions.cancel"), Some(&"Cancel".to_string()));
    }

    #[test]
    fn test_parse_locale_yaml_invalid() {
        assert!(parse_locale_yaml("bad: yaml: [").is_err());
    }

    #[test]
    fn test_embedded_catalog_loads_both_languages() {
        let catalog = Catalog::embedded().expect("embedded locales should parse");
        assert!(!catalog.en.is_empty());
        assert!(!catalog.th.is_empty());
    }

    #[test]
    /// What: Every key present in one embedded locale exists in the other
    ///
    /// - Input: Embedded en/th catalogs
    /// - Output: Identical key sets, so no language can silently fall back
    fn test_embedded_catalogs_have_matching_keys() {
        let catalog = Catalog::embedded().expect("embedded locales should parse");
        for key in catalog.en.keys() {
            assert!(catalog.th.contains_key(key), "missing in th: {key}");
        }
        for key in catalog.th.keys() {
            assert!(catalog.en.contains_key(key), "missing in en: {key}");
        }
    }
}
