//! Static forbidden-word lexicon.

/// Portuguese profanity and hate-speech terms, already normalized
/// (lower-case, no diacritics).
///
/// Order is significant: when a text contains several terms, the one listed
/// first is reported.
pub const FORBIDDEN_WORDS: &[&str] = &[
    // Profanity
    "merda",
    "porra",
    "caralho",
    "foda",
    "foder",
    "fodido",
    "puta",
    "puto",
    "cabrao",
    "corno",
    "vadia",
    "vagabunda",
    // Insults
    "idiota",
    "imbecil",
    "estupido",
    "otario",
    "babaca",
    "cretino",
    // Slurs
    "viado",
    "paneleiro",
    "zuca",
    "monhe",
];
