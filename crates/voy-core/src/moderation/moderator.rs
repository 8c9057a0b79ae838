//! Lexicon-backed detection and masking.

// The built-in lexicon is a compile-time constant; its patterns always compile
#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;

use super::lexicon::FORBIDDEN_WORDS;
use super::normalize::normalize;
use crate::error::{Result, VoyError};

/// Token substituted for each masked occurrence.
pub const DEFAULT_MASK: &str = "***";

static BUILTIN: LazyLock<Moderator> = LazyLock::new(|| {
    Moderator::new(FORBIDDEN_WORDS.iter().copied()).expect("built-in lexicon compiles")
});

/// How a forbidden term was found in the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The term stands on its own, delimited by word boundaries
    WholeWord,
    /// The term only appears inside a longer word
    Substring,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WholeWord => "whole_word",
            Self::Substring => "substring",
        }
    }
}

/// Outcome of an offensive-content check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffenseCheck {
    pub is_offensive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_kind: Option<MatchKind>,
}

impl OffenseCheck {
    fn clean() -> Self {
        Self {
            is_offensive: false,
            matched_word: None,
            match_kind: None,
        }
    }

    fn hit(term: &str, kind: MatchKind) -> Self {
        Self {
            is_offensive: true,
            matched_word: Some(term.to_string()),
            match_kind: Some(kind),
        }
    }
}

/// A compiled forbidden term.
#[derive(Debug)]
struct Term {
    /// Normalized spelling
    text: String,
    /// Whole-word pattern over normalized text
    word: Regex,
}

/// Detects and masks forbidden terms.
///
/// Terms are normalized on construction and keep their insertion order,
/// which decides which term is reported when several match.
#[derive(Debug)]
pub struct Moderator {
    terms: Vec<Term>,
    masker: Option<Regex>,
    mask: String,
}

impl Moderator {
    /// Build a moderator over `terms`, masking with [`DEFAULT_MASK`].
    ///
    /// Blank terms and duplicates (after normalization) are skipped.
    ///
    /// # Errors
    ///
    /// Returns `VoyError::InvalidInput` if a term cannot be compiled into a
    /// pattern (for instance when it exceeds the regex size limit).
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled: Vec<Term> = Vec::new();
        for raw in terms {
            let text = normalize(raw.as_ref().trim());
            if text.is_empty() || compiled.iter().any(|t| t.text == text) {
                continue;
            }
            let word = Regex::new(&format!(r"\b{}\b", regex::escape(&text)))
                .map_err(|e| VoyError::InvalidInput(format!("Invalid term {:?}: {}", text, e)))?;
            compiled.push(Term { text, word });
        }

        let masker = if compiled.is_empty() {
            None
        } else {
            let alternation = compiled
                .iter()
                .map(|t| accent_insensitive(&t.text))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)\b(?:{})\b", alternation);
            Some(
                Regex::new(&pattern)
                    .map_err(|e| VoyError::InvalidInput(format!("Invalid lexicon: {}", e)))?,
            )
        };

        Ok(Self {
            terms: compiled,
            masker,
            mask: DEFAULT_MASK.to_string(),
        })
    }

    /// The shared moderator over the built-in lexicon.
    pub fn builtin() -> &'static Moderator {
        &BUILTIN
    }

    /// Built-in lexicon followed by `extra` terms.
    ///
    /// # Errors
    ///
    /// See [`Moderator::new`].
    pub fn with_extra_terms<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = extra.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::new(
            FORBIDDEN_WORDS
                .iter()
                .map(|w| w.to_string())
                .chain(extra),
        )
    }

    /// Replace the mask token.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Normalized terms, in priority order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.text.as_str())
    }

    /// The configured mask token.
    pub fn mask_token(&self) -> &str {
        &self.mask
    }

    /// Check whether `text` contains a forbidden term.
    ///
    /// Terms are tried in order; for each, a whole-word match is tried
    /// before the substring fallback. The first term that matches either
    /// way is reported.
    pub fn check(&self, text: &str) -> OffenseCheck {
        let normalized = normalize(text);

        for term in &self.terms {
            if term.word.is_match(&normalized) {
                return OffenseCheck::hit(&term.text, MatchKind::WholeWord);
            }
            if normalized.contains(term.text.as_str()) {
                return OffenseCheck::hit(&term.text, MatchKind::Substring);
            }
        }

        OffenseCheck::clean()
    }

    /// Replace every whole-word occurrence of a forbidden term with the mask.
    ///
    /// Matching ignores case and accents, so `"MERDA"` and `"estúpido"` are
    /// masked. Occurrences inside longer words are left as they are, and the
    /// rest of the text is returned byte for byte.
    pub fn mask(&self, text: &str) -> String {
        match &self.masker {
            Some(masker) => masker.replace_all(text, NoExpand(&self.mask)).into_owned(),
            None => text.to_string(),
        }
    }
}

/// Regex fragment matching `term` with or without Portuguese diacritics.
fn accent_insensitive(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() * 4);
    for c in term.chars() {
        match c {
            'a' => pattern.push_str("[aáàâãä]"),
            'e' => pattern.push_str("[eéèêë]"),
            'i' => pattern.push_str("[iíìîï]"),
            'o' => pattern.push_str("[oóòôõö]"),
            'u' => pattern.push_str("[uúùûü]"),
            'c' => pattern.push_str("[cç]"),
            c if c.is_whitespace() => pattern.push_str(r"\s+"),
            other => pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        let check = Moderator::builtin().check("idiota");
        assert!(check.is_offensive);
        assert_eq!(check.matched_word.as_deref(), Some("idiota"));
        assert_eq!(check.match_kind, Some(MatchKind::WholeWord));
    }

    #[test]
    fn test_clean_text() {
        let check = Moderator::builtin().check("Olá, bom dia");
        assert_eq!(check, OffenseCheck::clean());
    }

    #[test]
    fn test_accented_and_uppercase_evasion() {
        let check = Moderator::builtin().check("Que ESTÚPIDO!");
        assert_eq!(check.matched_word.as_deref(), Some("estupido"));
        assert_eq!(check.match_kind, Some(MatchKind::WholeWord));
    }

    #[test]
    fn test_substring_fallback_flags_embedded_term() {
        // Known false positive: "puta" inside "computador"
        let check = Moderator::builtin().check("o meu computador avariou");
        assert!(check.is_offensive);
        assert_eq!(check.matched_word.as_deref(), Some("puta"));
        assert_eq!(check.match_kind, Some(MatchKind::Substring));
    }

    #[test]
    fn test_first_term_in_list_wins() {
        // "idiota" appears first in the text but "merda" comes first in the lexicon
        let check = Moderator::builtin().check("seu idiota de merda");
        assert_eq!(check.matched_word.as_deref(), Some("merda"));
    }

    #[test]
    fn test_mask_whole_word() {
        assert_eq!(
            Moderator::builtin().mask("Isso é uma merda"),
            "Isso é uma ***"
        );
    }

    #[test]
    fn test_mask_is_global_and_case_insensitive() {
        assert_eq!(
            Moderator::builtin().mask("Merda, MERDA e merda."),
            "***, *** e ***."
        );
    }

    #[test]
    fn test_mask_matches_accented_spelling() {
        assert_eq!(
            Moderator::builtin().mask("Não sejas estúpido"),
            "Não sejas ***"
        );
    }

    #[test]
    fn test_mask_leaves_embedded_terms_untouched() {
        let text = "o meu computador avariou";
        assert_eq!(Moderator::builtin().mask(text), text);
    }

    #[test]
    fn test_mask_clean_text_unchanged() {
        let text = "Preciso de renovar a autorização de residência.";
        assert_eq!(Moderator::builtin().mask(text), text);
    }

    #[test]
    fn test_extra_terms_are_normalized_and_appended() {
        let moderator = Moderator::with_extra_terms(["Palavrão"]).unwrap();
        assert_eq!(moderator.terms().last(), Some("palavrao"));

        let check = moderator.check("um PALAVRÃO aqui");
        assert_eq!(check.matched_word.as_deref(), Some("palavrao"));
        assert_eq!(moderator.mask("um PALAVRÃO aqui"), "um *** aqui");
    }

    #[test]
    fn test_blank_and_duplicate_terms_skipped() {
        let moderator = Moderator::new(["merda", "  ", "MERDA", ""]).unwrap();
        assert_eq!(moderator.terms().count(), 1);
    }

    #[test]
    fn test_multi_word_term() {
        let moderator = Moderator::new(["filho da mae"]).unwrap();
        assert!(moderator.check("Filho da Mãe!").is_offensive);
        assert_eq!(moderator.mask("seu filho  da mãe"), "seu ***");
    }

    #[test]
    fn test_custom_mask_token() {
        let moderator = Moderator::new(["merda"]).unwrap().with_mask("[removido]");
        assert_eq!(moderator.mask("que merda"), "que [removido]");
        assert_eq!(moderator.mask_token(), "[removido]");
    }

    #[test]
    fn test_mask_token_is_literal() {
        let moderator = Moderator::new(["merda"]).unwrap().with_mask("$0");
        assert_eq!(moderator.mask("que merda"), "que $0");
    }

    #[test]
    fn test_empty_lexicon_never_matches() {
        let moderator = Moderator::new(Vec::<String>::new()).unwrap();
        assert!(!moderator.check("merda").is_offensive);
        assert_eq!(moderator.mask("merda"), "merda");
    }

    #[test]
    fn test_check_serializes_without_empty_fields() {
        let clean = serde_json::to_value(Moderator::builtin().check("bom dia")).unwrap();
        assert_eq!(clean, serde_json::json!({ "is_offensive": false }));

        let hit = serde_json::to_value(Moderator::builtin().check("idiota")).unwrap();
        assert_eq!(hit["matched_word"], "idiota");
        assert_eq!(hit["match_kind"], "whole_word");
    }
}
