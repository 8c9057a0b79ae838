//! Text normalization for lexicon matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case `text` and strip diacritics.
///
/// The text is decomposed (NFD) and every combining mark is dropped, so
/// `"ESTÚPIDO"` and `"estupido"` normalize to the same string.
///
/// # Examples
///
/// ```
/// use voy_core::moderation::normalize;
///
/// assert_eq!(normalize("Olá, CORAÇÃO"), "ola, coracao");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
