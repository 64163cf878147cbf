//! # Random Strings
//!
//! Uniform random strings over a fixed alphabet.
//!
//! Not suitable for secrets; the default generator is [`rand::rng`].

use rand::Rng;

use crate::errors::{SKResult, StrkitError};

/// The alphabet used by [`random_string`].
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789&?%$@";

/// A random string of `length` chars drawn from [`DEFAULT_ALPHABET`].
pub fn random_string(length: usize) -> String {
    let symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    draw(&mut rand::rng(), &symbols, length)
}

/// A random string of `length` chars drawn from `alphabet`, with the
/// thread-local generator.
///
/// ## Errors
/// [`StrkitError::EmptyAlphabet`] when `alphabet` is empty.
pub fn random_string_in(
    length: usize,
    alphabet: &str,
) -> SKResult<String> {
    random_string_from(&mut rand::rng(), length, alphabet)
}

/// A random string of `length` chars drawn uniformly, with replacement,
/// from the chars of `alphabet`.
///
/// ## Arguments
/// * `rng` - The random source.
/// * `length` - Output length in chars.
/// * `alphabet` - The chars to draw from; repeated chars are weighted.
///
/// ## Errors
/// [`StrkitError::EmptyAlphabet`] when `alphabet` is empty.
pub fn random_string_from<R>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
) -> SKResult<String>
where
    R: Rng + ?Sized,
{
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(StrkitError::EmptyAlphabet);
    }
    Ok(draw(rng, &symbols, length))
}

fn draw<R>(
    rng: &mut R,
    symbols: &[char],
    length: usize,
) -> String
where
    R: Rng + ?Sized,
{
    (0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}
