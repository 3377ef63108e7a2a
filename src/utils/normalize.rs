//! Accent-insensitive string comparison helpers.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// Strips diacritical marks: canonical decomposition, drop every nonspacing
/// mark (Mn), canonical recomposition.
///
/// Spacing (Mc) and enclosing (Me) marks are kept. Case is left untouched, so
/// `"1012AB"` and `"1012ab"` stay different.
///
/// ```
/// use sendcloud::utils::normalize::unaccent;
///
/// assert_eq!(unaccent("Chaussée d'Ixelles 12"), "Chaussee d'Ixelles 12");
/// assert_eq!(unaccent("Straße"), "Straße");
/// ```
pub fn unaccent(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_nonspacing_mark(*c))
        .nfc()
        .collect()
}
