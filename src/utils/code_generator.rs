//! Short code generation.
//!
//! Codes are produced in two stages: a high-entropy seed string is built
//! from a CSPRNG and the wall clock, then compressed with SHA-256 and
//! base64-encoded. The first [`CODE_LENGTH`] alphanumeric characters of the
//! encoding become the code. Uniqueness is probabilistic; no coordination
//! with the store happens at generation time.

use base64::Engine as _;
use chrono::Utc;
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of every generated short code, in characters.
///
/// Shared with consumers that expect a fixed code length; changing it (or
/// [`ALPHABET`]) changes the collision probability and is a breaking change
/// for stored codes.
pub const CODE_LENGTH: usize = 9;

/// The 62-character alphabet codes are drawn from.
pub const ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of random characters in the seed string.
const SEED_RANDOM_CHARS: usize = 32;

/// The entropy source was unavailable.
///
/// Fatal to the current operation; the generator never falls back to a
/// weaker randomness source.
#[derive(Debug, Error)]
#[error("entropy source unavailable: {0}")]
pub struct GenerationFailed(pub String);

/// Capability interface for short code generation.
///
/// Kept as a trait so a deterministic fake can replace the real entropy
/// source in tests.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh [`CODE_LENGTH`]-character alphanumeric code.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationFailed`] if the system entropy source fails.
    fn generate(&self) -> Result<String, GenerationFailed>;
}

/// Hash-based code generator.
///
/// Hashes a random seed mixed with a wall-clock token, so two calls differ
/// even in the astronomically unlikely event of identical random draws.
pub struct HashCodeGenerator;

impl CodeGenerator for HashCodeGenerator {
    fn generate(&self) -> Result<String, GenerationFailed> {
        // A 256-bit digest encodes to 43 base64 characters; running out of
        // alphanumerics among them is not practically reachable, but a
        // fresh seed costs nothing.
        loop {
            let digest = Sha256::digest(seed()?.as_bytes());
            let encoded = base64::engine::general_purpose::STANDARD.encode(digest);

            let code: String = encoded
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .take(CODE_LENGTH)
                .collect();

            if code.len() == CODE_LENGTH {
                return Ok(code);
            }
        }
    }
}

/// Builds the seed string: random characters plus a wall-clock token.
///
/// The token is unix seconds and a sub-second component in hex, so rapid
/// successive calls still seed differently.
fn seed() -> Result<String, GenerationFailed> {
    let mut s = String::with_capacity(SEED_RANDOM_CHARS + 13);

    for _ in 0..SEED_RANDOM_CHARS {
        s.push(sample_alphabet()?);
    }

    let now = Utc::now();
    s.push_str(&format!(
        "{:08x}{:05x}",
        now.timestamp(),
        now.timestamp_subsec_nanos() % 0x100000
    ));

    Ok(s)
}

/// Draws one character uniformly from [`ALPHABET`].
///
/// Rejection sampling: bytes >= 248 are discarded so the remaining range is
/// an exact multiple of 62 and the modulo introduces no bias.
fn sample_alphabet() -> Result<char, GenerationFailed> {
    const LIMIT: u8 = (u8::MAX / 62) * 62; // 248

    loop {
        let mut byte = [0u8; 1];
        OsRng
            .try_fill_bytes(&mut byte)
            .map_err(|e| GenerationFailed(e.to_string()))?;

        if byte[0] < LIMIT {
            return Ok(ALPHABET[(byte[0] % 62) as usize] as char);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_fixed_length() {
        let code = HashCodeGenerator.generate().unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        for _ in 0..100 {
            let code = HashCodeGenerator.generate().unwrap();
            assert!(
                code.bytes().all(|b| ALPHABET.contains(&b)),
                "code '{}' contains a character outside the alphabet",
                code
            );
        }
    }

    #[test]
    fn test_generate_no_duplicates_under_volume() {
        let mut codes = HashSet::new();

        for _ in 0..10_000 {
            codes.insert(HashCodeGenerator.generate().unwrap());
        }

        assert_eq!(codes.len(), 10_000);
    }

    #[test]
    fn test_generate_differs_within_same_millisecond() {
        // Back-to-back calls land well inside one millisecond.
        let a = HashCodeGenerator.generate().unwrap();
        let b = HashCodeGenerator.generate().unwrap();

        assert_eq!(a.len(), CODE_LENGTH);
        assert_eq!(b.len(), CODE_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_contains_time_token() {
        let s = seed().unwrap();
        assert!(s.len() > SEED_RANDOM_CHARS);
        assert!(s[SEED_RANDOM_CHARS..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sample_alphabet_stays_in_range() {
        for _ in 0..1000 {
            let c = sample_alphabet().unwrap();
            assert!(ALPHABET.contains(&(c as u8)));
        }
    }
}
