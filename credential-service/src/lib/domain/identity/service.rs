use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenClaims;

use crate::identity::errors::AuthError;
use crate::identity::errors::StoreError;
use crate::identity::models::AuthenticationResult;
use crate::identity::models::CredentialPair;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::IdentityStore;

/// Domain service implementation for registration and login.
///
/// Stateless between calls. Argon2 work runs on the blocking pool, so a caller
/// may drop the returned future (e.g. on timeout) without leaving anything
/// half-done apart from a store insert, whose atomicity belongs to the store.
pub struct AuthService<S>
where
    S: IdentityStore,
{
    store: Arc<S>,
    authenticator: Arc<Authenticator>,
}

impl<S> AuthService<S>
where
    S: IdentityStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Identity persistence implementation
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(store: Arc<S>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: IdentityStore,
{
    async fn register(
        &self,
        credentials: CredentialPair,
    ) -> Result<AuthenticationResult, AuthError> {
        let (email, password) = credentials.into_parts();

        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password)).await??;

        // No existence check beforehand: the store's unique insert is the only arbiter.
        let identity = match self.store.create_identity(&email, password_hash).await {
            Ok(identity) => identity,
            Err(StoreError::DuplicateIdentity) => {
                tracing::info!("Registration rejected: credentials taken");
                return Err(AuthError::CredentialsTaken);
            }
            Err(e) => {
                tracing::error!(error = %e, "Identity store failed during registration");
                return Err(e.into());
            }
        };

        let access_token = self
            .authenticator
            .issue_token(&identity.id.to_string(), identity.email.as_str())?;

        tracing::info!(identity_id = %identity.id, "Identity registered");

        Ok(AuthenticationResult { access_token })
    }

    async fn login(&self, credentials: CredentialPair) -> Result<AuthenticationResult, AuthError> {
        let (email, password) = credentials.into_parts();

        let identity = self.store.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Identity store failed during login");
            AuthError::from(e)
        })?;

        let authenticator = Arc::clone(&self.authenticator);
        let outcome = tokio::task::spawn_blocking(move || match identity {
            Some(identity) => authenticator
                .authenticate(
                    &password,
                    &identity.password_hash,
                    &identity.id.to_string(),
                    identity.email.as_str(),
                )
                .map(|token| (identity.id, token)),
            None => {
                let _ = authenticator.verify_password(&password, None);
                Err(AuthenticationError::InvalidCredentials)
            }
        })
        .await?;

        match outcome {
            Ok((identity_id, access_token)) => {
                tracing::info!(identity_id = %identity_id, "Login succeeded");
                Ok(AuthenticationResult { access_token })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!("Login rejected: credentials incorrect");
                Err(AuthError::CredentialsIncorrect)
            }
            Err(AuthenticationError::PasswordError(e)) => Err(e.into()),
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(error = %e, "Token signing failed during login");
                Err(e.into())
            }
        }
    }

    async fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        Ok(self.authenticator.validate_token(token)?)
    }
}
