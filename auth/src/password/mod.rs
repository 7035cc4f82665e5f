pub mod argon2;
pub mod errors;

use std::fmt;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;

/// Self-describing password hash in PHC string format.
///
/// Carries the algorithm, cost parameters and salt alongside the digest, so
/// verification needs nothing but this value and the candidate password.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedCredential(String);

impl HashedCredential {
    /// Wrap a stored PHC string. No parsing happens here; a malformed value
    /// simply never verifies.
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedCredential(<redacted>)")
    }
}
