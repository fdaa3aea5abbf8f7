//! Character classes available for password generation.

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Identity of a character class within a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassId {
    /// Lowercase letters.
    Lower,
    /// Uppercase letters.
    Upper,
    /// Decimal digits.
    Digit,
    /// Caller-supplied symbol characters.
    Symbol,
}

impl ClassId {
    /// Human-readable class name, used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            ClassId::Lower => "lowercase",
            ClassId::Upper => "uppercase",
            ClassId::Digit => "digits",
            ClassId::Symbol => "symbols",
        }
    }
}

/// A character class after exclusion filtering, order preserved.
///
/// May be empty when exclusions removed every member; the pool builder
/// keeps empty classes in its output so that enforce-each can surface
/// them as failures instead of silently skipping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    id: ClassId,
    chars: Vec<char>,
}

impl CharClass {
    /// Creates a cleaned class from its identity and surviving characters.
    pub fn new(id: ClassId, chars: Vec<char>) -> Self {
        Self { id, chars }
    }

    /// Returns the class identity.
    #[inline]
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// Returns the surviving characters in definition order.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns true if exclusions removed every member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if `ch` belongs to this class.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}
