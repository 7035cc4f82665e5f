use std::fmt;
use std::str::FromStr;

use auth::HashedCredential;
use auth::SignedToken;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::identity::errors::CredentialError;

/// Registered identity.
///
/// One identity per email; the store enforces that at insert time.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub password_hash: HashedCredential,
    pub created_at: DateTime<Utc>,
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a new random identity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validated against RFC 5322; kept exactly as given, so lookups are
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidEmail` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, CredentialError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| CredentialError::InvalidEmail(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email and plaintext password supplied to register or login.
///
/// Lives only for the duration of one call. `Debug` never shows the password.
pub struct CredentialPair {
    email: EmailAddress,
    password: String,
}

impl CredentialPair {
    /// Validate raw request input.
    ///
    /// # Errors
    /// * `EmptyEmail` - Email is empty
    /// * `EmptyPassword` - Password is empty
    /// * `InvalidEmail` - Email is not a valid address
    pub fn new(email: String, password: String) -> Result<Self, CredentialError> {
        if email.is_empty() {
            return Err(CredentialError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }

        Ok(Self {
            email: EmailAddress::new(email)?,
            password,
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn into_parts(self) -> (EmailAddress, String) {
        (self.email, self.password)
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful register or login response, `{"access_token": "<jwt>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationResult {
    pub access_token: SignedToken,
}
