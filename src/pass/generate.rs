//! Password generation.

use rand::Rng;

use super::PassError;

/// Generate a password of `length` chars drawn uniformly, with replacement,
/// from `alphabet` using the thread-local RNG.
pub fn generate(length: usize, alphabet: &[char]) -> Result<String, PassError> {
    generate_with(&mut rand::rng(), length, alphabet)
}

/// Same as [`generate`] with a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: &[char],
) -> Result<String, PassError> {
    if alphabet.is_empty() {
        return Err(PassError::EmptyAlphabet);
    }

    Ok((0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect())
}
