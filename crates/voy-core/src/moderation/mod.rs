//! Offensive-content moderation for user-written text.
//!
//! Detection runs on a normalized copy of the input (lower-cased, diacritics
//! stripped) so accented spellings cannot slip past the lexicon. A forbidden
//! term counts as present when it appears as a whole word *or* as a plain
//! substring; the substring fallback trades false positives for recall.
//!
//! Masking is stricter: only whole-word occurrences are replaced, so a term
//! buried inside a longer, unrelated word is left untouched.

mod lexicon;
mod moderator;
mod normalize;

pub use lexicon::FORBIDDEN_WORDS;
pub use moderator::{MatchKind, Moderator, OffenseCheck, DEFAULT_MASK};
pub use normalize::normalize;

/// Check `text` against the built-in lexicon.
///
/// # Examples
///
/// ```
/// use voy_core::moderation::contains_offensive_content;
///
/// let check = contains_offensive_content("idiota");
/// assert!(check.is_offensive);
/// assert_eq!(check.matched_word.as_deref(), Some("idiota"));
///
/// assert!(!contains_offensive_content("Olá, bom dia").is_offensive);
/// ```
pub fn contains_offensive_content(text: &str) -> OffenseCheck {
    Moderator::builtin().check(text)
}

/// Replace whole-word occurrences of built-in forbidden terms with `***`.
///
/// # Examples
///
/// ```
/// use voy_core::moderation::mask_offensive_content;
///
/// assert_eq!(mask_offensive_content("Isso é uma merda"), "Isso é uma ***");
/// ```
pub fn mask_offensive_content(text: &str) -> String {
    Moderator::builtin().mask(text)
}
