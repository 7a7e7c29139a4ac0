use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::state::{Character, SortKey};

/// Collation key of a display string, compared field by field.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct LabelKey {
    /// Lowercase base letters with accents stripped ("élan" -> "elan").
    base: String,
    /// Lowercase decomposed text; unaccented letters order before accented ones.
    accents: String,
    /// Per-character case flag; lowercase orders before uppercase.
    case: Vec<(bool, char)>,
}

impl LabelKey {
    /// Build the key for one label.
    fn new(label: &str) -> Self {
        let accents: String = label.nfd().flat_map(char::to_lowercase).collect();
        let base = accents.chars().filter(|c| !is_combining_mark(*c)).collect();
        let case = label.nfd().map(|c| (c.is_uppercase(), c)).collect();
        Self {
            base,
            accents,
            case,
        }
    }
}

/// What: Compare two display strings the way a reader expects.
///
/// Details:
/// - Letters compare without accents or case first, so "Élan" sits next to "Elan"
///   and "alien" next to "Alien".
/// - Remaining ties: unaccented before accented, then lowercase before uppercase.
#[must_use]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    LabelKey::new(a).cmp(&LabelKey::new(b))
}

/// The field a sort key selects.
fn sort_field(c: &Character, key: SortKey) -> &str {
    match key {
        SortKey::Name => &c.name,
        SortKey::Origin => &c.origin.name,
    }
}

/// What: Produce a newly ordered copy of a fetched page.
///
/// Inputs:
/// - `characters`: Records in server order
/// - `key`: Field to order by
///
/// Output:
/// - New vector with the same elements in ascending order.
///
/// Details:
/// - Stable: records with equal keys keep their server order.
#[must_use]
pub fn sorted_characters(characters: &[Character], key: SortKey) -> Vec<Character> {
    let mut sorted = characters.to_vec();
    sorted.sort_by(|a, b| compare_labels(sort_field(a, key), sort_field(b, key)));
    sorted
}
