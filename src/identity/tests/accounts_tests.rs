//! Service tests for registration, login, and profile maintenance.

use std::sync::Arc;
use std::time::Duration;

use crate::identity::{
    adapters::{JwtTokenIssuer, memory::InMemoryUserRepository},
    domain::{ProfileUpdate, UserId},
    ports::{TokenIssuer, UserRepositoryError},
    services::{AccountError, AccountService, LoginRequest, RegisterRequest},
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = AccountService<InMemoryUserRepository, JwtTokenIssuer, DefaultClock>;

const SECRET: &str = "account-test-secret-at-least-32-bytes";

#[fixture]
fn service() -> eyre::Result<TestService> {
    let tokens = JwtTokenIssuer::new(SECRET, Duration::from_secs(3600))?;
    Ok(AccountService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(tokens),
        Arc::new(DefaultClock),
    ))
}

fn register_request() -> RegisterRequest {
    RegisterRequest::new("Alice", "alice@example.com", "hunter2hunter2")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_hashes_the_password_and_issues_a_valid_token(
    service: eyre::Result<TestService>,
) -> eyre::Result<()> {
    let accounts = service?;

    let authenticated = accounts.register(register_request()).await?;

    ensure!(authenticated.user.password_hash().starts_with("$argon2"));
    ensure!(authenticated.user.email().as_str() == "alice@example.com");

    let tokens = JwtTokenIssuer::new(SECRET, Duration::from_secs(3600))?;
    ensure!(tokens.verify(&authenticated.token)? == authenticated.user.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_a_duplicate_email_case_insensitively(
    service: eyre::Result<TestService>,
) -> eyre::Result<()> {
    let accounts = service?;
    accounts.register(register_request()).await?;

    let duplicate = RegisterRequest::new("Other Alice", "ALICE@example.com", "different-pass");
    let result = accounts.register(duplicate).await;

    ensure!(matches!(
        result,
        Err(AccountError::Repository(
            UserRepositoryError::DuplicateEmail(_)
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_an_empty_password(
    service: eyre::Result<TestService>,
) -> eyre::Result<()> {
    let accounts = service?;

    let result = accounts
        .register(RegisterRequest::new("Bob", "bob@example.com", ""))
        .await;

    ensure!(matches!(result, Err(AccountError::Domain(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_succeeds_with_the_registered_credentials(
    service: eyre::Result<TestService>,
) -> eyre::Result<()> {
    let accounts = service?;
    let registered = accounts.register(register_request()).await?;

    let authenticated = accounts
        .login(LoginRequest::new("Alice@Example.com", "hunter2hunter2"))
        .await?;

    ensure!(authenticated.user.id() == registered.user.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_failures_are_indistinguishable(
    service: eyre::Result<TestService>,
) -> eyre::Result<()> {
    let accounts = service?;
    accounts.register(register_request()).await?;

    let wrong_password = accounts
        .login(LoginRequest::new("alice@example.com", "wrong"))
        .await;
    let unknown_email = accounts
        .login(LoginRequest::new("nobody@example.com", "hunter2hunter2"))
        .await;

    for result in [wrong_password, unknown_email] {
        let Err(err) = result else {
            eyre::bail!("login unexpectedly succeeded");
        };
        ensure!(matches!(err, AccountError::InvalidCredentials));
        ensure!(err.to_string() == "invalid credentials");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_update_round_trips(service: eyre::Result<TestService>) -> eyre::Result<()> {
    let accounts = service?;
    let registered = accounts.register(register_request()).await?;

    let updated = accounts
        .update_profile(
            registered.user.id(),
            ProfileUpdate {
                name: Some("Alice B".to_owned()),
                bio: Some("gardener".to_owned()),
                ..ProfileUpdate::default()
            },
        )
        .await?;
    ensure!(updated.name() == "Alice B");

    let fetched = accounts.profile(registered.user.id()).await?;
    ensure!(fetched.name() == "Alice B");
    ensure!(fetched.bio() == Some("gardener"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_of_an_unknown_user_is_not_found(
    service: eyre::Result<TestService>,
) -> eyre::Result<()> {
    let accounts = service?;

    let result = accounts.profile(UserId::new()).await;

    ensure!(matches!(result, Err(AccountError::NotFound(_))));
    Ok(())
}
