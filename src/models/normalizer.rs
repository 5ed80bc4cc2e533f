use crate::constants::{COMPANY_SUFFIXES, DEFAULT_CACHE_SIZE, MAX_NORMALIZATION_PASSES, PERSON_TITLES};
use crate::models::{CacheStats, TransformCache};
use crate::types::{Token, TokenRef};
use crate::utils::{extract_first_last, initials, middle_tokens, tokenize};
use crate::EntityType;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Builds a case-insensitive whole-word alternation, longest entries first so that a shorter
/// vocabulary word never shadows a longer one sharing its prefix.
fn vocabulary_alternation(words: &[&str]) -> String {
    let mut words: Vec<&str> = words.to_vec();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", vocabulary_alternation(PERSON_TITLES)))
        .expect("person title pattern is valid")
});

// One suffix word per match, with an optional trailing period ("Inc." and "Inc").
static COMPANY_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{})\b\.?",
        vocabulary_alternation(COMPANY_SUFFIXES)
    ))
    .expect("company suffix pattern is valid")
});

/// Output of [`Normalizer::normalize`]: lowercase, punctuation-free, whitespace-collapsed text
/// with titles or legal suffixes removed, plus its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    text: String,
    tokens: Vec<Token>,
}

impl NormalizedText {
    fn new(text: String) -> Self {
        let tokens = tokenize(&text);
        Self { text, tokens }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn first_last(&self) -> (Option<&TokenRef>, Option<&TokenRef>) {
        extract_first_last(&self.text)
    }

    pub fn middle_tokens(&self) -> Vec<&TokenRef> {
        middle_tokens(&self.text)
    }

    /// The suffix-stripped company name. Company normalization already removes legal suffixes,
    /// so this is the normalized text itself.
    pub fn core_name(&self) -> &str {
        &self.text
    }

    pub fn initials(&self) -> String {
        initials(&self.text)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizerCacheStats {
    pub title_strip: CacheStats,
    pub suffix_strip: CacheStats,
    pub punctuation_strip: CacheStats,
    pub whitespace_normalize: CacheStats,
}

/// Deterministic text cleanup for person and company names.
///
/// Each transformation step is memoized in its own bounded LRU cache owned by the normalizer.
/// The caches only affect performance; output is identical with caching disabled.
pub struct Normalizer {
    title_cache: TransformCache,
    suffix_cache: TransformCache,
    punctuation_cache: TransformCache,
    whitespace_cache: TransformCache,
}

impl Normalizer {
    pub fn new(cache_size: usize) -> Self {
        Self {
            title_cache: TransformCache::new(cache_size),
            suffix_cache: TransformCache::new(cache_size),
            punctuation_cache: TransformCache::new(cache_size),
            whitespace_cache: TransformCache::new(cache_size),
        }
    }

    pub fn without_cache() -> Self {
        Self::new(0)
    }

    /// Removes honorific and professional titles (Mr, Dr, Rabbi, ...).
    pub fn remove_titles(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.title_cache.get_or_insert_with(text, |text| {
            TITLE_PATTERN.replace_all(text, "").trim().to_string()
        })
    }

    /// Removes legal-form suffixes (Inc, Ltd, GmbH, ...).
    pub fn remove_company_suffixes(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.suffix_cache.get_or_insert_with(text, |text| {
            COMPANY_SUFFIX_PATTERN.replace_all(text, "").trim().to_string()
        })
    }

    /// Keeps only alphanumeric and whitespace characters.
    pub fn remove_punctuation(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.punctuation_cache.get_or_insert_with(text, |text| {
            text.chars()
                .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                .collect()
        })
    }

    /// Collapses whitespace runs to a single space and trims both ends.
    pub fn normalize_whitespace(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.whitespace_cache.get_or_insert_with(text, |text| {
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        })
    }

    /// Punctuation, whitespace and case normalization without title or suffix removal.
    pub fn canonicalize(&self, text: &str) -> String {
        let text = self.remove_punctuation(text);
        self.normalize_whitespace(&text).to_lowercase()
    }

    pub fn normalize(&self, text: &str, entity_type: EntityType) -> NormalizedText {
        if text.trim().is_empty() {
            return NormalizedText::default();
        }

        // Punctuation removal can expose a new title or suffix word ("L.L.C." -> "llc"), so the
        // pipeline runs until its output stops changing.
        let mut current = self.normalize_once(text, entity_type);
        for _ in 1..MAX_NORMALIZATION_PASSES {
            let next = self.normalize_once(&current, entity_type);
            if next == current {
                break;
            }
            current = next;
        }

        trace!("Normalized {} {:?} -> {:?}", entity_type, text, current);

        NormalizedText::new(current)
    }

    fn normalize_once(&self, text: &str, entity_type: EntityType) -> String {
        let stripped = match entity_type {
            EntityType::Person => self.remove_titles(text),
            EntityType::Company => self.remove_company_suffixes(text),
        };

        self.canonicalize(&stripped)
    }

    pub fn cache_stats(&self) -> NormalizerCacheStats {
        NormalizerCacheStats {
            title_strip: self.title_cache.stats(),
            suffix_strip: self.suffix_cache.stats(),
            punctuation_strip: self.punctuation_cache.stats(),
            whitespace_normalize: self.whitespace_cache.stats(),
        }
    }

    pub fn clear_caches(&self) {
        self.title_cache.clear();
        self.suffix_cache.clear();
        self.punctuation_cache.clear();
        self.whitespace_cache.clear();
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}
