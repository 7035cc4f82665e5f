use async_trait::async_trait;
use auth::HashedCredential;
use auth::TokenClaims;

use crate::identity::errors::AuthError;
use crate::identity::errors::StoreError;
use crate::identity::models::AuthenticationResult;
use crate::identity::models::CredentialPair;
use crate::identity::models::EmailAddress;
use crate::identity::models::Identity;

/// Port for registration, login and token verification.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a new identity and issue its first access token.
    ///
    /// # Errors
    /// * `CredentialsTaken` - Email is already registered
    /// * `Store`, `Hashing`, `Signing`, `Worker` - Infrastructure fault
    async fn register(&self, credentials: CredentialPair)
        -> Result<AuthenticationResult, AuthError>;

    /// Check credentials and issue an access token.
    ///
    /// # Errors
    /// * `CredentialsIncorrect` - Unknown email or wrong password (indistinguishable)
    /// * `Store`, `Hashing`, `Signing`, `Worker` - Infrastructure fault
    async fn login(&self, credentials: CredentialPair) -> Result<AuthenticationResult, AuthError>;

    /// Verify a presented access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Forged, malformed or expired token
    async fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Persistence operations for identities.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Insert a new identity, assigning its id.
    ///
    /// The uniqueness check and the insert must be one atomic step.
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn create_identity(
        &self,
        email: &EmailAddress,
        password_hash: HashedCredential,
    ) -> Result<Identity, StoreError>;

    /// Retrieve identity by exact email.
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    /// * `Corrupted` - Stored row could not be mapped back to an identity
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Identity>, StoreError>;
}
