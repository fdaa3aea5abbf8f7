//! Fixed-length character password generation.

use super::{GenerateError, GeneratedSecret, COVERAGE_ATTEMPTS};
use crate::entropy;
use crate::pool::{self, CharClass, PoolOptions};
use crate::rng::Selector;

/// Parameters for one password generation request.
///
/// The caller is responsible for clamping `length` to its supported
/// range before handing the request over; generation takes the value
/// as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordRequest {
    /// Output length in characters.
    pub length: usize,
    /// Class selection and exclusion rules.
    pub pool: PoolOptions,
    /// Require at least one character from every selected class.
    pub enforce_each: bool,
    /// Require all output characters to be pairwise distinct.
    pub no_repeats: bool,
}

/// Generates a password satisfying the request's constraints.
///
/// The output order never reveals draw order: the final sequence is
/// secure-shuffled in both generation paths, so enforced per-class
/// characters are not predictable by position.
pub fn generate_password<R: Selector>(
    request: &PasswordRequest,
    rng: &mut R,
) -> Result<GeneratedSecret, GenerateError> {
    let pool = pool::build(&request.pool)?;
    let length = request.length;

    let required: &[CharClass] = if request.enforce_each {
        pool.classes()
    } else {
        &[]
    };

    for class in required {
        if class.is_empty() {
            return Err(GenerateError::EmptyRequiredClass {
                class: class.id().label(),
            });
        }
    }

    if length < required.len() {
        return Err(GenerateError::LengthTooShortForCoverage {
            length,
            required: required.len(),
        });
    }

    let mut chars: Vec<char> = if request.no_repeats {
        if pool.size() < length {
            return Err(GenerateError::PoolTooSmallForUniqueSecret {
                length,
                pool_size: pool.size(),
            });
        }

        let mut sample = rng.sample_without_replacement(pool.chars(), length)?;
        if !required.is_empty() {
            let mut attempts = 1;
            while !covers_all(&sample, required) {
                if attempts >= COVERAGE_ATTEMPTS {
                    tracing::warn!(
                        attempts,
                        length,
                        pool_size = pool.size(),
                        "Gave up searching for a covering unique sample"
                    );
                    return Err(GenerateError::CoverageUnsatisfiable {
                        attempts: COVERAGE_ATTEMPTS,
                    });
                }
                sample = rng.sample_without_replacement(pool.chars(), length)?;
                attempts += 1;
            }
        }
        sample
    } else {
        let mut chars = Vec::with_capacity(length);
        // One pick per required class, in class-definition order; the
        // trailing shuffle hides which positions were seeded.
        for class in required {
            chars.push(rng.choose_one(class.chars()));
        }
        while chars.len() < length {
            chars.push(rng.choose_one(pool.chars()));
        }
        chars
    };

    rng.shuffle(&mut chars);

    Ok(GeneratedSecret::Password {
        value: chars.into_iter().collect(),
        length,
        pool_size: pool.size(),
        entropy_bits: entropy::round_bits(entropy::bits_per_char(length, pool.size())),
    })
}

fn covers_all(sample: &[char], required: &[CharClass]) -> bool {
    required
        .iter()
        .all(|class| sample.iter().any(|&ch| class.contains(ch)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ExclusionOptions;
    use proptest::prelude::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn test_rng() -> ChaCha20Rng {
        ChaCha20Rng::from_seed([13u8; 32])
    }

    fn alphanumeric(length: usize) -> PasswordRequest {
        PasswordRequest {
            length,
            pool: PoolOptions {
                lower: true,
                upper: true,
                digits: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_length_and_pool_size() {
        let mut rng = test_rng();
        let secret = generate_password(&alphanumeric(24), &mut rng).unwrap();

        match secret {
            GeneratedSecret::Password {
                value,
                length,
                pool_size,
                entropy_bits,
            } => {
                assert_eq!(value.chars().count(), 24);
                assert_eq!(length, 24);
                assert_eq!(pool_size, 62);
                assert!((entropy_bits - 142.90).abs() < 0.01);
            }
            other => panic!("unexpected mode: {other:?}"),
        }
    }

    #[test]
    fn test_enforce_each_covers_every_class() {
        let mut rng = test_rng();
        let mut request = alphanumeric(24);
        request.enforce_each = true;

        for _ in 0..50 {
            let secret = generate_password(&request, &mut rng).unwrap();
            let value = secret.value();
            assert!(value.chars().any(|c| c.is_ascii_lowercase()));
            assert!(value.chars().any(|c| c.is_ascii_uppercase()));
            assert!(value.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_enforce_each_length_too_short() {
        let mut rng = test_rng();
        let mut request = alphanumeric(2);
        request.enforce_each = true;

        assert_eq!(
            generate_password(&request, &mut rng),
            Err(GenerateError::LengthTooShortForCoverage {
                length: 2,
                required: 3,
            })
        );
    }

    #[test]
    fn test_no_repeats_all_distinct() {
        let mut rng = test_rng();
        let mut request = alphanumeric(40);
        request.no_repeats = true;

        for _ in 0..20 {
            let secret = generate_password(&request, &mut rng).unwrap();
            let mut chars: Vec<char> = secret.value().chars().collect();
            chars.sort_unstable();
            chars.dedup();
            assert_eq!(chars.len(), 40);
        }
    }

    #[test]
    fn test_no_repeats_pool_too_small() {
        let mut rng = test_rng();
        let request = PasswordRequest {
            length: 5,
            pool: PoolOptions {
                digits: true,
                exclusions: ExclusionOptions {
                    exclude_chars: "456789".into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            no_repeats: true,
            ..Default::default()
        };

        assert_eq!(
            generate_password(&request, &mut rng),
            Err(GenerateError::PoolTooSmallForUniqueSecret {
                length: 5,
                pool_size: 4,
            })
        );
    }

    #[test]
    fn test_no_repeats_with_enforce_each() {
        let mut rng = test_rng();
        let request = PasswordRequest {
            length: 12,
            pool: PoolOptions {
                lower: true,
                digits: true,
                ..Default::default()
            },
            enforce_each: true,
            no_repeats: true,
        };

        for _ in 0..20 {
            let secret = generate_password(&request, &mut rng).unwrap();
            let value = secret.value();
            assert!(value.chars().any(|c| c.is_ascii_lowercase()));
            assert!(value.chars().any(|c| c.is_ascii_digit()));

            let mut chars: Vec<char> = value.chars().collect();
            chars.sort_unstable();
            chars.dedup();
            assert_eq!(chars.len(), 12);
        }
    }

    #[test]
    fn test_coverage_retry_never_returns_uncovered_result() {
        // Pool of 26 lowercase + '!', unique length 26: each sample
        // misses '!' with probability 1/27, so the bounded retry is
        // exercised hard. The contract is that the outcome is either
        // a covering result or the explicit coverage error, never a
        // silently uncovered value.
        let mut rng = test_rng();
        let request = PasswordRequest {
            length: 26,
            pool: PoolOptions {
                lower: true,
                symbols: Some("!".into()),
                ..Default::default()
            },
            enforce_each: true,
            no_repeats: true,
        };

        for _ in 0..20 {
            match generate_password(&request, &mut rng) {
                Ok(secret) => assert!(secret.value().contains('!')),
                Err(e) => assert_eq!(
                    e,
                    GenerateError::CoverageUnsatisfiable {
                        attempts: COVERAGE_ATTEMPTS,
                    }
                ),
            }
        }
    }

    #[test]
    fn test_empty_required_class_fails_fast() {
        let mut rng = test_rng();
        let request = PasswordRequest {
            length: 12,
            pool: PoolOptions {
                lower: true,
                digits: true,
                exclusions: ExclusionOptions {
                    exclude_chars: "0123456789".into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            enforce_each: true,
            ..Default::default()
        };

        assert_eq!(
            generate_password(&request, &mut rng),
            Err(GenerateError::EmptyRequiredClass { class: "digits" })
        );
    }

    #[test]
    fn test_excluded_chars_never_appear() {
        let mut rng = test_rng();
        let request = PasswordRequest {
            length: 64,
            pool: PoolOptions {
                lower: true,
                upper: true,
                digits: true,
                exclusions: ExclusionOptions {
                    ambiguous: true,
                    exclude_chars: "aeiouAEIOU".into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };

        for _ in 0..20 {
            let secret = generate_password(&request, &mut rng).unwrap();
            for ch in secret.value().chars() {
                assert!(!"O0oIl1|`'\"".contains(ch), "ambiguous char {ch:?} leaked");
                assert!(!"aeiouAEIOU".contains(ch), "excluded char {ch:?} leaked");
            }
        }
    }

    #[test]
    fn test_no_class_selected_propagates() {
        let mut rng = test_rng();
        let request = PasswordRequest {
            length: 12,
            ..Default::default()
        };

        assert!(matches!(
            generate_password(&request, &mut rng),
            Err(GenerateError::Pool(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_output_length_matches_request(length in 4usize..=64) {
            let mut rng = crate::rng::SecureRng::from_os_entropy();
            let secret = generate_password(&alphanumeric(length), &mut rng).unwrap();
            prop_assert_eq!(secret.value().chars().count(), length);
        }

        #[test]
        fn prop_no_repeats_always_distinct(length in 4usize..=50) {
            let mut rng = crate::rng::SecureRng::from_os_entropy();
            let mut request = alphanumeric(length);
            request.no_repeats = true;

            let secret = generate_password(&request, &mut rng).unwrap();
            let mut chars: Vec<char> = secret.value().chars().collect();
            chars.sort_unstable();
            chars.dedup();
            prop_assert_eq!(chars.len(), length);
        }

        #[test]
        fn prop_output_stays_inside_pool(length in 4usize..=64, seed: [u8; 32]) {
            let mut rng = ChaCha20Rng::from_seed(seed);
            let request = alphanumeric(length);
            let pool = crate::pool::build(&request.pool).unwrap();

            let secret = generate_password(&request, &mut rng).unwrap();
            for ch in secret.value().chars() {
                prop_assert!(pool.contains(ch));
            }
        }
    }
}
