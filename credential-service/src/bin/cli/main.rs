mod command;

use std::io::BufRead;
use std::sync::Arc;

use auth::Authenticator;
use auth::TokenIssuer;
use credential_service::config::Config;
use credential_service::identity::errors::AuthError;
use credential_service::identity::models::CredentialPair;
use credential_service::identity::ports::AuthServicePort;
use credential_service::identity::service::AuthService;
use credential_service::repositories::PostgresIdentityStore;
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::command::Command;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // stdout carries the command result; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credential_service=debug,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Command::parse(std::env::args().skip(1))?;

    tracing::info!(
        service = "credential-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    let signing_secret = config.signing_secret()?;
    let token_issuer = TokenIssuer::new(&signing_secret).with_ttl(config.token_ttl());
    tracing::info!(
        token_ttl_hours = token_issuer.ttl().num_hours(),
        "Token issuer configured"
    );
    let authenticator = Arc::new(Authenticator::with_components(
        config.password_hasher()?,
        token_issuer,
    )?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let identity_store = Arc::new(PostgresIdentityStore::new(pg_pool));
    let auth_service = AuthService::new(identity_store, authenticator);

    match command {
        Command::Register { email } => {
            let credentials = CredentialPair::new(email, read_password()?)?;
            report(auth_service.register(credentials).await)
        }
        Command::Login { email } => {
            let credentials = CredentialPair::new(email, read_password()?)?;
            report(auth_service.login(credentials).await)
        }
        Command::Verify { token } => report(auth_service.verify_token(&token).await),
    }
}

fn read_password() -> Result<String, anyhow::Error> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn report<T: Serialize>(outcome: Result<T, AuthError>) -> Result<(), anyhow::Error> {
    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) if e.is_unexpected() => {
            tracing::error!(error = %e, "Request failed");
            Err(anyhow::anyhow!("Internal error"))
        }
        Err(e) => Err(e.into()),
    }
}
