//! Credential primitives.
//!
//! - Password hashing (Argon2id, PHC strings)
//! - Access token issuance and verification (HS256 JWT)
//! - `Authorization: Bearer` header parsing
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{SigningSecret, TokenIssuer};
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(&secret);
//! let token = issuer.issue("42", "alice@example.com").unwrap();
//! let claims = issuer.verify(token.as_str()).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SigningSecret};
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&secret).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let token = auth
//!     .authenticate("password123", &hash, "42", "alice@example.com")
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(token.as_str()).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod bearer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use bearer::extract_bearer;
pub use jwt::JwtError;
pub use jwt::SignedToken;
pub use jwt::SigningSecret;
pub use jwt::TokenClaims;
pub use jwt::TokenIssuer;
pub use password::HashedCredential;
pub use password::PasswordError;
pub use password::PasswordHasher;
