//! Short code generation.
//!
//! Codes are drawn uniformly at random from the 62-character alphanumeric
//! alphabet. No cryptographic strength is required: collision handling is the
//! repository's conditional insert, not code unpredictability.

use rand::Rng;

/// Alphabet for generated short codes: lowercase, uppercase, digits.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code of the given length.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
