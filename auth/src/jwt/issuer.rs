use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::claims::TokenClaims;
use super::errors::JwtError;
use super::handler::JwtHandler;
use super::secret::SigningSecret;

/// Lifetime of an access token.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 20;

/// Compact signed bearer token.
///
/// Serializes as a bare JSON string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedToken(String);

impl SignedToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignedToken(<redacted>)")
    }
}

/// Issues and verifies access tokens.
///
/// Stateless: nothing about an issued token is remembered, so a token stays
/// valid until its `exp` passes.
pub struct TokenIssuer {
    handler: JwtHandler,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret` and the default 20 hour TTL.
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for an identity, valid from now for the configured TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed; no token is produced
    pub fn issue(&self, subject: &str, email: &str) -> Result<SignedToken, JwtError> {
        self.issue_at(subject, email, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<SignedToken, JwtError> {
        let claims = TokenClaims::for_identity(subject, email, issued_at, self.ttl);
        self.handler.encode(&claims).map(SignedToken)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed structure, or expired
    pub fn verify(&self, token: &str) -> Result<TokenClaims, JwtError> {
        let claims: TokenClaims = self.handler.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            tracing::debug!("Token rejected at expiry boundary");
            return Err(JwtError::InvalidToken);
        }

        Ok(claims)
    }
}
