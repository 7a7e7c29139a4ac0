//! Locale table parsing.

use crate::i18n::translations::TranslationMap;

/// English table bundled at compile time.
pub const EMBEDDED_EN: &str = include_str!("../../config/locales/en.yml");
/// German table bundled at compile time.
pub const EMBEDDED_DE: &str = include_str!("../../config/locales/de.yml");

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: Locale file content
///
/// Output:
/// - `Result<TranslationMap, String>` containing flattened translations
///
/// # Errors
/// - Returns `Err` when the content is empty or not valid YAML
///
/// Details:
/// - Expects a single top-level key naming the language (e.g., "de:")
/// - Flattens nested maps into dot-notation keys
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    if yaml_content.trim().is_empty() {
        return Err("Locale table is empty".to_string());
    }
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = TranslationMap::new();
    if let Some(root) = doc.as_mapping() {
        for (_lang_key, lang_value) in root {
            flatten_yaml_value(lang_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Details:
/// - Nested maps become `parent.child`
/// - Scalars other than strings are stored via their display form
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
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        _ => {
            tracing::debug!(key = prefix, "skipping non-scalar locale entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_keys() {
        let yaml = "xx:\n  card:\n    name: \"Nom\"\n  count: 3\n";
        let map = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(map.get("card.name").map(String::as_str), Some("Nom"));
        assert_eq!(map.get("count").map(String::as_str), Some("3"));
    }

    #[test]
    fn rejects_empty_and_invalid() {
        assert!(parse_locale_yaml("   ").is_err());
        assert!(parse_locale_yaml("en: [unclosed").is_err());
    }

    #[test]
    fn embedded_tables_parse() {
        let en = parse_locale_yaml(EMBEDDED_EN).expect("english table parses");
        let de = parse_locale_yaml(EMBEDDED_DE).expect("german table parses");
        assert_eq!(en.get("messages.error").map(String::as_str), Some("An error occurred."));
        assert_eq!(
            de.get("messages.error").map(String::as_str),
            Some("Ein Fehler ist aufgetreten.")
        );
    }
}
