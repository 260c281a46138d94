//! Script nonce for the sidebar content-security-policy.

use std::fmt;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a nonce.
pub const NONCE_LEN: usize = 32;

/// Random alphanumeric token allowing one script tag per render.
///
/// Drawn from the thread-local generator; not intended as a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce(String);

impl Nonce {
    /// Generates a fresh nonce.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates a nonce from the given generator.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..NONCE_LEN)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        Self(token)
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_nonce_shape() {
        let nonce = Nonce::generate();
        assert_eq!(nonce.as_str().len(), NONCE_LEN);
        assert!(nonce.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_consecutive_nonces_differ() {
        assert_ne!(Nonce::generate(), Nonce::generate());
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = Nonce::generate_with(&mut StdRng::seed_from_u64(7));
        let b = Nonce::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
