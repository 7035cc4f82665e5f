use crate::jwt::JwtError;
use crate::jwt::SignedToken;
use crate::jwt::SigningSecret;
use crate::jwt::TokenClaims;
use crate::jwt::TokenIssuer;
use crate::password::HashedCredential;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Input hashed once at construction to produce the decoy hash.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-identities";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Holds a decoy hash so that a login for an unknown identity performs the same
/// Argon2 work as a login with a wrong password.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    decoy_hash: HashedCredential,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with default hashing costs and token TTL.
    ///
    /// # Arguments
    /// * `secret` - Process signing secret
    ///
    /// # Errors
    /// * `PasswordError` - The decoy hash could not be computed
    pub fn new(secret: &SigningSecret) -> Result<Self, AuthenticationError> {
        Self::with_components(PasswordHasher::new(), TokenIssuer::new(secret))
    }

    /// Create an authenticator from preconfigured parts.
    ///
    /// # Errors
    /// * `PasswordError` - The decoy hash could not be computed
    pub fn with_components(
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
    ) -> Result<Self, AuthenticationError> {
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            token_issuer,
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<HashedCredential, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// With no stored hash the password is checked against the decoy and the
    /// result is always `false`.
    pub fn verify_password(&self, password: &str, stored_hash: Option<&HashedCredential>) -> bool {
        match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                let _ = self.password_hasher.verify(password, &self.decoy_hash);
                false
            }
        }
    }

    /// Verify credentials and generate a token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity identifier for the `sub` claim
    /// * `email` - Identity email for the `email` claim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &HashedCredential,
        subject: &str,
        email: &str,
    ) -> Result<SignedToken, AuthenticationError> {
        if !self.verify_password(password, Some(stored_hash)) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(subject, email)?)
    }

    /// Generate a token without password verification, e.g. right after
    /// registration.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: &str, email: &str) -> Result<SignedToken, JwtError> {
        self.token_issuer.issue(subject, email)
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is forged, malformed or expired
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.token_issuer.verify(token)
    }
}
