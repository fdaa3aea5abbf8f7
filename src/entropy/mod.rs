//! Entropy estimation for generated secrets.
//!
//! These are upper-bound estimates: each output position is modeled as
//! an independent uniform draw from the pool (or word list). The
//! enforce-each and no-repeats constraints reduce true entropy below
//! these values; the estimate is a strength proxy, not an exact count.

/// Entropy in bits of `length` independent uniform draws from a pool
/// of `pool_size` characters.
///
/// Returns 0 when the length is zero or the pool offers no choice.
pub fn bits_per_char(length: usize, pool_size: usize) -> f64 {
    if length == 0 || pool_size <= 1 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Entropy in bits of `word_count` independent uniform draws from a
/// word list of `wordlist_size` entries.
pub fn bits_per_word(word_count: usize, wordlist_size: usize) -> f64 {
    if word_count == 0 || wordlist_size <= 1 {
        return 0.0;
    }
    word_count as f64 * (wordlist_size as f64).log2()
}

/// Entropy contributed by `count` appended uniform decimal digits.
pub fn appended_digit_bits(count: usize) -> f64 {
    count as f64 * 10f64.log2()
}

/// Entropy contributed by one appended symbol drawn from a set with
/// `distinct_symbols` distinct members (floored at a 1-bit choice).
pub fn appended_symbol_bits(distinct_symbols: usize) -> f64 {
    (distinct_symbols.max(2) as f64).log2()
}

/// Rounds an entropy estimate to two decimal places for reporting.
pub fn round_bits(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}
