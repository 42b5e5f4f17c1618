//! Random file name tokens.

use rand::Rng;

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random lowercase alphanumeric token of 5 or 6 characters.
pub fn random_token<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(5..=6);
    (0..len)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
