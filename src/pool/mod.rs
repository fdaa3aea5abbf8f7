//! Character pool construction.
//!
//! Assembles the effective character universe for a password request:
//! each enabled class is filtered through the active exclusion rules
//! (order preserved), the cleaned classes are concatenated, and the
//! result is deduplicated keeping first occurrences. The cleaned
//! per-class groups are retained so the password generator can enforce
//! per-class coverage.

mod classes;
mod exclusions;

pub use classes::{CharClass, ClassId, DIGITS, LOWERCASE, UPPERCASE};
pub use exclusions::{ExclusionOptions, AMBIGUOUS, SIMILAR_SYMBOLS, WEBSITE_UNSAFE};

use thiserror::Error;

/// Errors that can occur while building a pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("no character classes selected (lower/upper/digits/symbols)")]
    NoClassSelected,
    #[error("character pool has {size} characters after exclusions, need at least 2")]
    PoolTooSmall {
        /// Pool size after exclusion filtering and deduplication.
        size: usize,
    },
}

/// Which character classes a password request draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolOptions {
    /// Include lowercase letters.
    pub lower: bool,
    /// Include uppercase letters.
    pub upper: bool,
    /// Include decimal digits.
    pub digits: bool,
    /// Caller-supplied symbol characters; `Some` enables the class,
    /// even when the string is empty.
    pub symbols: Option<String>,
    /// Exclusion rules applied to every class.
    pub exclusions: ExclusionOptions,
}

/// The effective character universe for one password request.
///
/// Immutable once built. Building twice from identical options yields
/// an identical pool and class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<char>,
    classes: Vec<CharClass>,
}

impl Pool {
    /// Returns the deduplicated pool characters in first-occurrence order.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the cleaned per-class groups in definition order.
    ///
    /// A group may be empty when exclusions removed every member.
    #[inline]
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Returns the number of distinct characters in the pool.
    #[inline]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if `ch` is available for selection.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

/// Builds the character pool for the given options.
///
/// Fails with [`PoolError::NoClassSelected`] when no class is enabled
/// and [`PoolError::PoolTooSmall`] when fewer than two distinct
/// characters survive the exclusion rules.
pub fn build(options: &PoolOptions) -> Result<Pool, PoolError> {
    let mut selected: Vec<(ClassId, &str)> = Vec::new();
    if options.lower {
        selected.push((ClassId::Lower, LOWERCASE));
    }
    if options.upper {
        selected.push((ClassId::Upper, UPPERCASE));
    }
    if options.digits {
        selected.push((ClassId::Digit, DIGITS));
    }
    if let Some(symbols) = options.symbols.as_deref() {
        selected.push((ClassId::Symbol, symbols));
    }

    if selected.is_empty() {
        return Err(PoolError::NoClassSelected);
    }

    let classes: Vec<CharClass> = selected
        .into_iter()
        .map(|(id, raw)| {
            let cleaned = raw
                .chars()
                .filter(|ch| !options.exclusions.is_excluded(*ch))
                .collect();
            CharClass::new(id, cleaned)
        })
        .collect();

    let mut chars: Vec<char> = Vec::new();
    for class in &classes {
        for &ch in class.chars() {
            if !chars.contains(&ch) {
                chars.push(ch);
            }
        }
    }

    if chars.len() < 2 {
        return Err(PoolError::PoolTooSmall { size: chars.len() });
    }

    tracing::debug!(
        pool_size = chars.len(),
        classes = classes.len(),
        "Built character pool"
    );

    Ok(Pool { chars, classes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_three() -> PoolOptions {
        PoolOptions {
            lower: true,
            upper: true,
            digits: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_full_alphanumeric_pool() {
        let pool = build(&all_three()).unwrap();
        assert_eq!(pool.size(), 62);
        assert_eq!(pool.classes().len(), 3);
    }

    #[test]
    fn test_no_class_selected() {
        let result = build(&PoolOptions::default());
        assert_eq!(result, Err(PoolError::NoClassSelected));
    }

    #[test]
    fn test_deduplication_preserves_first_occurrence() {
        // 'a' and 'b' appear both as lowercase and as symbols.
        let options = PoolOptions {
            lower: true,
            symbols: Some("ab!".into()),
            ..Default::default()
        };
        let pool = build(&options).unwrap();
        assert_eq!(pool.size(), 27);
        assert_eq!(pool.chars()[0], 'a');
        assert_eq!(*pool.chars().last().unwrap(), '!');
    }

    #[test]
    fn test_ambiguous_exclusion_shrinks_pool() {
        let mut options = all_three();
        options.exclusions.ambiguous = true;
        let pool = build(&options).unwrap();

        // AMBIGUOUS removes O, o, I, l, 0, 1 from the 62-char universe.
        assert_eq!(pool.size(), 56);
        for ch in "O0oIl1".chars() {
            assert!(!pool.contains(ch));
        }
    }

    #[test]
    fn test_empty_class_kept_for_coverage_checks() {
        let options = PoolOptions {
            lower: true,
            digits: true,
            exclusions: ExclusionOptions {
                exclude_chars: DIGITS.into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let pool = build(&options).unwrap();

        assert_eq!(pool.size(), 26);
        assert_eq!(pool.classes().len(), 2);
        assert!(pool.classes()[1].is_empty());
    }

    #[test]
    fn test_pool_too_small() {
        let options = PoolOptions {
            digits: true,
            exclusions: ExclusionOptions {
                exclude_chars: "123456789".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(build(&options), Err(PoolError::PoolTooSmall { size: 1 }));
    }

    #[test]
    fn test_build_is_idempotent() {
        let options = PoolOptions {
            lower: true,
            symbols: Some("!@#$%".into()),
            exclusions: ExclusionOptions {
                similar_symbols: true,
                exclude_chars: "qz".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(build(&options).unwrap(), build(&options).unwrap());
    }

    #[test]
    fn test_symbols_enabled_but_empty_counts_as_class() {
        let options = PoolOptions {
            symbols: Some(String::new()),
            ..Default::default()
        };
        // Class is selected, pool just ends up too small.
        assert_eq!(build(&options), Err(PoolError::PoolTooSmall { size: 0 }));
    }
}
