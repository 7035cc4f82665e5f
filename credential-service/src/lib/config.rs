use std::env;
use std::fmt;

use auth::JwtError;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::SigningSecret;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Variable name the signing secret has always been deployed under.
pub const LEGACY_SECRET_VAR: &str = "JWT_SECRET";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
    /// Lower only to keep signing with a pre-existing short secret.
    #[serde(default = "default_min_secret_length")]
    pub min_secret_length: usize,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .field("min_secret_length", &self.min_secret_length)
            .finish()
    }
}

/// Argon2 cost parameters for new hashes.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_expiration_hours() -> i64 {
    auth::jwt::DEFAULT_TOKEN_TTL_HOURS
}

fn default_min_secret_length() -> usize {
    auth::jwt::MIN_SECRET_LEN
}

fn default_memory_kib() -> u32 {
    PasswordHasher::DEFAULT_MEMORY_KIB
}

fn default_iterations() -> u32 {
    PasswordHasher::DEFAULT_ITERATIONS
}

fn default_parallelism() -> u32 {
    PasswordHasher::DEFAULT_PARALLELISM
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `JWT_SECRET` (signing secret only)
    /// 2. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// A missing signing secret is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"));

        Self::from_builder(builder, env::var(LEGACY_SECRET_VAR).ok())
    }

    fn from_builder(
        builder: config::builder::ConfigBuilder<DefaultState>,
        legacy_secret: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config: Config = builder
            .set_override_option("jwt.secret", legacy_secret)?
            .build()?
            .try_deserialize()?;

        if config.jwt.expiration_hours <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be positive, got {}",
                config.jwt.expiration_hours
            )));
        }

        Ok(config)
    }

    /// Signing secret for the token issuer.
    ///
    /// # Errors
    /// * `MissingSecret` - Configured secret is empty
    /// * `WeakSecret` - Configured secret is shorter than `jwt.min_secret_length`
    pub fn signing_secret(&self) -> Result<SigningSecret, JwtError> {
        SigningSecret::with_min_len(self.jwt.secret.as_bytes(), self.jwt.min_secret_length)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.jwt.expiration_hours)
    }

    /// Password hasher built from the configured cost parameters.
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are out of range for Argon2
    pub fn password_hasher(&self) -> Result<PasswordHasher, PasswordError> {
        PasswordHasher::with_params(
            self.password.memory_kib,
            self.password.iterations,
            self.password.parallelism,
        )
    }
}
