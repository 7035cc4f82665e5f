use std::fmt;

use super::errors::JwtError;

/// Minimum secret length for HS256 (256 bits).
pub const MIN_SECRET_LEN: usize = 32;

/// Process-wide HMAC signing secret.
///
/// Built once from configuration and handed to the token issuer. The bytes
/// are never printed, not even through `Debug`.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap the configured secret, requiring at least `MIN_SECRET_LEN` bytes.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty or whitespace only
    /// * `WeakSecret` - Secret is shorter than `MIN_SECRET_LEN`
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, JwtError> {
        Self::with_min_len(secret, MIN_SECRET_LEN)
    }

    /// Wrap the configured secret with an explicit minimum length.
    ///
    /// Lowering the minimum is meant for deployments that still sign with a
    /// pre-existing short secret; anything below the HS256 recommendation is
    /// logged at startup.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty or whitespace only
    /// * `WeakSecret` - Secret is shorter than `min_len`
    pub fn with_min_len(secret: impl Into<Vec<u8>>, min_len: usize) -> Result<Self, JwtError> {
        let bytes = secret.into();

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(JwtError::MissingSecret);
        }

        if bytes.len() < min_len {
            return Err(JwtError::WeakSecret {
                min: min_len,
                actual: bytes.len(),
            });
        }

        if bytes.len() < MIN_SECRET_LEN {
            tracing::warn!(
                length = bytes.len(),
                recommended = MIN_SECRET_LEN,
                "Signing secret is shorter than recommended for HS256"
            );
        }

        Ok(Self(bytes))
    }

    pub(crate) fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
