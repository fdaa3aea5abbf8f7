//! Secret generation.
//!
//! Orchestrates the pool builder, secure selector, word source, and
//! entropy estimator into the two generation modes: fixed-length
//! character passwords and multi-word passphrases. Each call is
//! stateless; the only side effect is consuming randomness.

mod password;
mod passphrase;
mod secret;

pub use password::{generate_password, PasswordRequest};
pub use passphrase::{generate_passphrase, PassphraseRequest};
pub use secret::GeneratedSecret;

use crate::pool::PoolError;
use crate::rng::SelectorError;
use thiserror::Error;

/// Maximum sampling attempts when combining no-repeats with
/// enforce-each coverage.
pub const COVERAGE_ATTEMPTS: usize = 50;

/// Errors that can occur during secret generation.
///
/// All failures are value-level and carry the offending quantity so a
/// caller can adjust parameters. Generation never recovers internally;
/// the only retry is the bounded coverage search in
/// no-repeats + enforce-each mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("required class '{class}' has no characters left after exclusions")]
    EmptyRequiredClass {
        /// Label of the class that cannot contribute a character.
        class: &'static str,
    },
    #[error("length {length} cannot cover {required} required classes with one character each")]
    LengthTooShortForCoverage {
        /// Requested output length.
        length: usize,
        /// Number of classes that must each contribute a character.
        required: usize,
    },
    #[error("unique output of length {length} needs a pool of at least that size, have {pool_size}")]
    PoolTooSmallForUniqueSecret {
        /// Requested output length.
        length: usize,
        /// Available pool size.
        pool_size: usize,
    },
    #[error("could not cover every required class within {attempts} unique samples")]
    CoverageUnsatisfiable {
        /// Number of samples drawn before giving up.
        attempts: usize,
    },
    #[error("word count must be at least 1")]
    EmptyWordCount,
    #[error("symbol pool is empty after exclusions")]
    EmptySymbolPool,
}

impl From<SelectorError> for GenerateError {
    fn from(e: SelectorError) -> Self {
        match e {
            SelectorError::InsufficientPoolSize {
                requested,
                available,
            } => GenerateError::PoolTooSmallForUniqueSecret {
                length: requested,
                pool_size: available,
            },
        }
    }
}
