//! Character exclusion rules.
//!
//! Three fixed exclusion sets plus a caller-supplied list. Each is
//! toggled independently; the effective exclusion set is the union of
//! whichever are enabled.

/// Characters easily misread for one another (zero vs capital O,
/// one vs lowercase L, pipe) plus quote and backtick variants.
pub const AMBIGUOUS: &str = "O0oIl1|`'\"";

/// Symbols that render near-identically in many fonts.
pub const SIMILAR_SYMBOLS: &str = "\\|/`'\"";

/// Characters that commonly break web forms: whitespace and quotes.
pub const WEBSITE_UNSAFE: &str = " \t\r\n\"'`";

/// Which exclusion rules apply to a generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionOptions {
    /// Drop the [`AMBIGUOUS`] set.
    pub ambiguous: bool,
    /// Drop the [`SIMILAR_SYMBOLS`] set.
    pub similar_symbols: bool,
    /// Drop the [`WEBSITE_UNSAFE`] set.
    pub website_safe: bool,
    /// Caller-supplied characters to drop, on top of the fixed sets.
    pub exclude_chars: String,
}

impl ExclusionOptions {
    /// Returns true if `ch` falls in any enabled exclusion set.
    pub fn is_excluded(&self, ch: char) -> bool {
        self.ambiguous && AMBIGUOUS.contains(ch)
            || self.similar_symbols && SIMILAR_SYMBOLS.contains(ch)
            || self.website_safe && WEBSITE_UNSAFE.contains(ch)
            || self.exclude_chars.contains(ch)
    }

    /// The same toggles with the caller exclude list dropped.
    ///
    /// The appended-symbol pool in passphrase mode honors only the
    /// fixed-set toggles, never the caller exclude list.
    pub fn without_exclude_chars(&self) -> Self {
        Self {
            exclude_chars: String::new(),
            ..self.clone()
        }
    }
}
