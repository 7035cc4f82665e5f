pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;
pub mod secret;

pub use claims::TokenClaims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use issuer::SignedToken;
pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_TOKEN_TTL_HOURS;
pub use secret::SigningSecret;
pub use secret::MIN_SECRET_LEN;
