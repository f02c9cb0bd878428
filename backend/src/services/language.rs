//! Language detection for chat input
//!
//! Decides whether a visitor wrote in English or Turkish so that both the
//! model prompt and the canned answers use the same language. The check is
//! deliberately conservative: Turkish is only returned on a clear signal,
//! everything else is English.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// Letters that only occur in Turkish among the two supported languages
const TURKISH_CHARS: &[char] = &['ç', 'ğ', 'ı', 'ö', 'ş', 'ü'];

/// Words that are unambiguously Turkish
const STRONG_TURKISH_WORDS: &[&str] = &[
    "merhaba",
    "nasıl",
    "nedir",
    "nelerdir",
    "hakkında",
    "hizmetleriniz",
    "çözümleriniz",
    "danışmanlık",
    "misiniz",
    "musunuz",
    "miyim",
];

/// Question and verb endings
const TURKISH_SUFFIXES: &[&str] = &["misiniz", "musunuz", "midir", "müdür", "nelerdir"];

/// Inputs shorter than this carry no usable signal
const MIN_DETECTABLE_CHARS: usize = 3;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Turkish,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify `text` as English or Turkish.
///
/// Rules, first match wins:
/// 1. fewer than 3 characters after trimming → English
/// 2. any of ç ğ ı ö ş ü → Turkish
/// 3. any strong Turkish word → Turkish
/// 4. any word ending in a Turkish question suffix → Turkish
/// 5. English
pub fn detect(text: &str) -> Language {
    let lowered = text.to_lowercase();
    let lowered = lowered.trim();

    if lowered.chars().count() < MIN_DETECTABLE_CHARS {
        return Language::English;
    }

    if lowered.chars().any(|c| TURKISH_CHARS.contains(&c)) {
        return Language::Turkish;
    }

    let words = tokenize(lowered);

    if STRONG_TURKISH_WORDS.iter().any(|w| words.contains(w)) {
        return Language::Turkish;
    }

    if words
        .iter()
        .any(|word| TURKISH_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)))
    {
        return Language::Turkish;
    }

    Language::English
}

/// Set of word tokens in `text` (punctuation stripped, case kept as given)
fn tokenize(text: &str) -> HashSet<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}
