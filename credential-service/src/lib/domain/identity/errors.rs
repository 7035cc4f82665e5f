use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for credential input validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Email must not be empty")]
    EmptyEmail,

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

/// Error reported by identity store implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Identity already exists")]
    DuplicateIdentity,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Stored identity is corrupted: {0}")]
    Corrupted(String),
}

/// Outcome of a failed register, login or token check.
///
/// The first three variants are user-facing and terminal. Everything else is
/// an infrastructure fault that callers should answer with a generic failure.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Credentials taken")]
    CredentialsTaken,

    #[error("Credentials incorrect")]
    CredentialsIncorrect,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Identity store error: {0}")]
    Store(#[from] StoreError),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] PasswordError),

    #[error("Token signing failed: {0}")]
    Signing(JwtError),

    #[error("Worker task failed: {0}")]
    Worker(String),
}

impl AuthError {
    /// True for infrastructure faults, false for user-facing outcomes.
    pub fn is_unexpected(&self) -> bool {
        !matches!(
            self,
            AuthError::CredentialsTaken | AuthError::CredentialsIncorrect | AuthError::InvalidToken
        )
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::InvalidToken => AuthError::InvalidToken,
            other => AuthError::Signing(other),
        }
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Worker(err.to_string())
    }
}
