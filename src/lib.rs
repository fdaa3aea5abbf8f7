//! Entropass Library
//!
//! Generates high-entropy secrets (fixed-length character passwords
//! or multi-word passphrases) from a cryptographically secure random
//! source, under composable constraints, and reports a Shannon-entropy
//! estimate for each result.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! pool / wordlist → generate → GeneratedSecret
//!        ↓             ↓
//!       rng         entropy
//! ```
//!
//! # Design Principles
//!
//! - **Fail fast**: constraint violations surface as typed errors with
//!   the offending quantity; nothing is silently adjusted
//! - **CSPRNG only**: every draw comes from ChaCha20 seeded by OS
//!   entropy, never a non-cryptographic generator
//! - **Stateless calls**: one request in, one result out; concurrent
//!   callers each own their pool, sequence, and random source
//! - **Honest estimates**: entropy bits are a documented upper bound,
//!   not a strength score
//!
//! # Example
//!
//! ```
//! use entropass::{
//!     generate_password, generate_passphrase,
//!     PasswordRequest, PassphraseRequest,
//!     PoolOptions, SecureRng, WordList,
//! };
//!
//! let mut rng = SecureRng::from_os_entropy();
//!
//! let request = PasswordRequest {
//!     length: 24,
//!     pool: PoolOptions {
//!         lower: true,
//!         upper: true,
//!         digits: true,
//!         ..Default::default()
//!     },
//!     enforce_each: true,
//!     ..Default::default()
//! };
//! let password = generate_password(&request, &mut rng).unwrap();
//! assert_eq!(password.value().len(), 24);
//!
//! let words = WordList::fallback();
//! let passphrase =
//!     generate_passphrase(&PassphraseRequest::default(), &words, &mut rng).unwrap();
//! assert!(passphrase.entropy_bits() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod entropy;
pub mod generate;
pub mod pool;
pub mod rng;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use generate::{
    generate_password, generate_passphrase, GenerateError, GeneratedSecret, PasswordRequest,
    PassphraseRequest,
};
pub use pool::{ExclusionOptions, Pool, PoolError, PoolOptions};
pub use rng::{SecureRng, Selector, SelectorError};
pub use wordlist::WordList;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
