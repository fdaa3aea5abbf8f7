//! The result record for a generation request.

use serde::{Deserialize, Serialize};

/// A generated secret and its reported metadata.
///
/// Created once per request and never mutated. Serializes with a
/// `mode` tag so callers can emit it directly as structured output.
/// Entropy is reported rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GeneratedSecret {
    /// A fixed-length character password.
    Password {
        /// The generated password.
        value: String,
        /// Number of characters.
        length: usize,
        /// Distinct characters available for each draw.
        pool_size: usize,
        /// Estimated entropy in bits, rounded to 2 decimals.
        entropy_bits: f64,
    },
    /// A multi-word passphrase.
    Passphrase {
        /// The generated passphrase, including any appended extras.
        value: String,
        /// Number of words before appended extras.
        words: usize,
        /// Size of the word list drawn from.
        wordlist_size: usize,
        /// Estimated entropy in bits, rounded to 2 decimals.
        entropy_bits: f64,
        /// Name of the word source used ("fallback" or a file name).
        /// Metadata only, not part of the security contract.
        source: String,
    },
}

impl GeneratedSecret {
    /// Returns the secret value itself.
    pub fn value(&self) -> &str {
        match self {
            GeneratedSecret::Password { value, .. } => value,
            GeneratedSecret::Passphrase { value, .. } => value,
        }
    }

    /// Returns the reported entropy estimate in bits.
    pub fn entropy_bits(&self) -> f64 {
        match self {
            GeneratedSecret::Password { entropy_bits, .. } => *entropy_bits,
            GeneratedSecret::Passphrase { entropy_bits, .. } => *entropy_bits,
        }
    }
}
