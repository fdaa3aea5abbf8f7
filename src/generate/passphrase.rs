//! Multi-word passphrase generation.

use super::{GenerateError, GeneratedSecret};
use crate::entropy;
use crate::pool::ExclusionOptions;
use crate::rng::Selector;
use crate::wordlist::WordList;

/// Parameters for one passphrase generation request.
///
/// Word count and appended-digit count are taken as given; clamping
/// to supported ranges is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseRequest {
    /// Number of words to draw.
    pub words: usize,
    /// Separator placed between words (and before the extras block).
    pub separator: String,
    /// Flip a coin per word to capitalize its first letter.
    pub capitalize: bool,
    /// Number of uniform decimal digits appended after the phrase.
    pub append_digits: usize,
    /// Append one uniform symbol after any appended digits.
    pub append_symbol: bool,
    /// Symbol characters the appended symbol is drawn from.
    pub symbols: String,
    /// Exclusion toggles applied to the appended-symbol pool. The
    /// caller exclude list is ignored here; only the fixed-set
    /// toggles apply.
    pub exclusions: ExclusionOptions,
}

impl Default for PassphraseRequest {
    fn default() -> Self {
        Self {
            words: 5,
            separator: "-".to_string(),
            capitalize: false,
            append_digits: 0,
            append_symbol: false,
            symbols: String::new(),
            exclusions: ExclusionOptions::default(),
        }
    }
}

/// Generates a passphrase from the given word list.
///
/// Words are drawn independently with replacement. When any extras
/// (digits or a symbol) are produced, a single separator instance
/// sits between the word phrase and the extras block; the extras
/// themselves are not separated from each other.
pub fn generate_passphrase<R: Selector>(
    request: &PassphraseRequest,
    list: &WordList,
    rng: &mut R,
) -> Result<GeneratedSecret, GenerateError> {
    if request.words == 0 {
        return Err(GenerateError::EmptyWordCount);
    }

    let mut chosen: Vec<String> = (0..request.words)
        .map(|_| list.words()[rng.uniform_index(list.len())].clone())
        .collect();

    if request.capitalize {
        for word in &mut chosen {
            if rng.coin_flip() {
                capitalize_first(word);
            }
        }
    }

    let mut phrase = chosen.join(&request.separator);

    let mut extras = String::new();
    for _ in 0..request.append_digits {
        extras.push(char::from(b'0' + rng.uniform_index(10) as u8));
    }

    if request.append_symbol {
        let symbol_pool = symbol_pool(&request.symbols, &request.exclusions);
        if symbol_pool.is_empty() {
            return Err(GenerateError::EmptySymbolPool);
        }
        extras.push(rng.choose_one(&symbol_pool));
    }

    if !extras.is_empty() {
        phrase.push_str(&request.separator);
        phrase.push_str(&extras);
    }

    let mut bits = entropy::bits_per_word(request.words, list.len());
    bits += entropy::appended_digit_bits(request.append_digits);
    if request.append_symbol {
        bits += entropy::appended_symbol_bits(distinct_count(&request.symbols));
    }

    Ok(GeneratedSecret::Passphrase {
        value: phrase,
        words: request.words,
        wordlist_size: list.len(),
        entropy_bits: entropy::round_bits(bits),
        source: list.source().to_string(),
    })
}

/// Filters and deduplicates the appended-symbol pool.
///
/// Only the fixed-set toggles apply; the caller exclude list is not
/// consulted for the appended symbol.
fn symbol_pool(symbols: &str, exclusions: &ExclusionOptions) -> Vec<char> {
    let toggles = exclusions.without_exclude_chars();
    let mut pool: Vec<char> = Vec::new();
    for ch in symbols.chars() {
        if !toggles.is_excluded(ch) && !pool.contains(&ch) {
            pool.push(ch);
        }
    }
    pool
}

/// Number of distinct characters in the caller's raw symbol string.
/// The symbol entropy term uses the raw set, matching the estimate's
/// upper-bound semantics.
fn distinct_count(symbols: &str) -> usize {
    let mut seen: Vec<char> = Vec::new();
    for ch in symbols.chars() {
        if !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    seen.len()
}

fn capitalize_first(word: &mut String) {
    if let Some(first) = word.chars().next() {
        let upper = first.to_ascii_uppercase();
        word.replace_range(..first.len_utf8(), &upper.to_string());
    }
}
