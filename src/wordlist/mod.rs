//! Word source for passphrase generation.
//!
//! A [`WordList`] holds validated candidate words: ASCII alphabetic,
//! 3 to 20 letters, lowercased on intake. When a caller-supplied list
//! is missing, unreadable, or yields no valid words, the fixed
//! fallback list takes its place so passphrase generation always has
//! a usable source.

use std::path::Path;

/// Built-in word list used when no external list is available.
const FALLBACK_WORDS: [&str; 40] = [
    "alpha", "bravo", "cobalt", "delta", "ember", "falcon", "gadget", "harbor", "ivory", "jazz",
    "karma", "lunar", "matrix", "nebula", "onyx", "pixel", "quantum", "ranger", "saffron", "tiger",
    "ultra", "vector", "whiskey", "xenon", "yonder", "zephyr", "crypto", "socket", "router",
    "kernel", "cipher", "buffer", "packet", "lambda", "copper", "breeze", "orange", "atlas",
    "vortex", "shadow",
];

/// Source name reported for the built-in list.
const FALLBACK_SOURCE: &str = "fallback";

/// An immutable, validated word list for one generation request.
///
/// Invariant: never empty. Construction falls back to the built-in
/// list rather than producing an empty source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    source: String,
}

impl WordList {
    /// Returns the built-in 40-word fallback list.
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
            source: FALLBACK_SOURCE.to_string(),
        }
    }

    /// Builds a list from raw lines, keeping only valid words.
    ///
    /// Lines are trimmed; valid words are lowercased. Falls back to
    /// the built-in list when nothing valid survives.
    pub fn from_lines<'a, I>(lines: I, source: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<String> = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| is_valid_word(line))
            .map(str::to_ascii_lowercase)
            .collect();

        if words.is_empty() {
            tracing::warn!(source, "Word source yielded no valid words, using fallback");
            return Self::fallback();
        }

        Self {
            words,
            source: source.to_string(),
        }
    }

    /// Loads a word list from a file, falling back when the path is
    /// absent or the file cannot be read.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::fallback();
        };

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let list = Self::from_lines(content.lines(), &source);
                tracing::info!(
                    source = list.source.as_str(),
                    words = list.len(),
                    "Loaded word list"
                );
                list
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read word list, using fallback"
                );
                Self::fallback()
            }
        }
    }

    /// Returns the candidate words in list order.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of candidate words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the source name ("fallback" or the file name).
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A valid word is 3 to 20 ASCII letters.
fn is_valid_word(word: &str) -> bool {
    (3..=20).contains(&word.len()) && word.chars().all(|ch| ch.is_ascii_alphabetic())
}
