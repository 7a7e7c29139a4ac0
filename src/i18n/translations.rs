//! Flattened locale tables and the fallback lookup used by every label.

use std::collections::HashMap;

/// Dot-notation key (e.g. `card.origin`) to display text.
pub type TranslationMap = HashMap<String, String>;

/// What: Resolve a label, falling back to English and then to the key itself.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `active`: Table of the language being displayed
/// - `english`: English table, complete by construction
///
/// Output:
/// - Display text; never empty for a non-empty key.
///
/// Details:
/// - Returning the key keeps a missing entry visible on screen instead of blank.
pub fn translate_with_fallback(key: &str, active: &TranslationMap, english: &TranslationMap) -> String {
    active
        .get(key)
        .or_else(|| {
            let hit = english.get(key);
            if hit.is_some() {
                tracing::debug!(key, "label missing in active locale, using English");
            }
            hit
        })
        .cloned()
        .unwrap_or_else(|| {
            tracing::debug!(key, "label missing in every locale, showing key");
            key.to_string()
        })
}
