//! ChoreRun HTTP server.
//!
//! Wires the `PostgreSQL` adapters, the JWT token issuer, and the service
//! layer into the axum router and serves it.

use chorerun::api::{self, AppState};
use chorerun::chore::{
    adapters::postgres::{PostgresChoreApplicationRepository, PostgresChoreRepository},
    ports::{ChoreApplicationRepository, ChoreRepository},
    services::{ChoreApplicationService, ChoreLifecycleService, ChoreQueryService},
};
use chorerun::identity::{
    adapters::{JwtTokenIssuer, postgres::PostgresUserRepository},
    ports::{TokenIssuer, UserRepository},
    services::AccountService,
};
use chorerun::review::{
    adapters::postgres::PostgresReviewRepository, ports::ReviewRepository,
    services::ReputationService,
};
use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Server configuration, from flags or environment.
#[derive(Debug, Parser)]
#[command(name = "chorerun", about = "Marketplace task board server")]
struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "CHORERUN_BIND", default_value = "0.0.0.0:5000")]
    bind: SocketAddr,

    /// `PostgreSQL` connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Secret used to sign bearer tokens; at least 32 bytes.
    #[arg(long, env = "CHORERUN_JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Bearer token lifetime in seconds.
    #[arg(long, env = "CHORERUN_TOKEN_TTL", default_value_t = 86_400)]
    token_ttl: u64,
}

fn build_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let clock = Arc::new(DefaultClock);
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let chores: Arc<dyn ChoreRepository> = Arc::new(PostgresChoreRepository::new(pool.clone()));
    let applications: Arc<dyn ChoreApplicationRepository> =
        Arc::new(PostgresChoreApplicationRepository::new(pool.clone()));
    let reviews: Arc<dyn ReviewRepository> = Arc::new(PostgresReviewRepository::new(pool));
    let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(
        &config.jwt_secret,
        Duration::from_secs(config.token_ttl),
    )?);

    Ok(AppState {
        accounts: Arc::new(AccountService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            Arc::clone(&clock),
        )),
        lifecycle: Arc::new(ChoreLifecycleService::new(
            Arc::clone(&chores),
            Arc::clone(&clock),
        )),
        listing: Arc::new(ChoreQueryService::new(Arc::clone(&chores))),
        applications: Arc::new(ChoreApplicationService::new(
            Arc::clone(&chores),
            applications,
            Arc::clone(&clock),
        )),
        reputation: Arc::new(ReputationService::new(Arc::clone(&chores), reviews, clock)),
        users,
        tokens,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let state = build_state(&config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(address = %config.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
