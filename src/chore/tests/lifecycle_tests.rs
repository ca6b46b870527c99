//! Service orchestration tests for posting and lifecycle transitions.

use std::sync::Arc;

use crate::chore::{
    adapters::memory::InMemoryChoreRepository,
    domain::{ChoreDomainError, ChoreId, ChoreStatus, Urgency},
    services::{ChoreLifecycleError, ChoreLifecycleService, PostChoreRequest},
};
use crate::identity::domain::UserId;
use chrono::{Datelike, Timelike};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = ChoreLifecycleService<InMemoryChoreRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    ChoreLifecycleService::new(
        Arc::new(InMemoryChoreRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn request() -> PostChoreRequest {
    PostChoreRequest::new(
        "Walk the dog",
        "Twice around the park",
        "Manchester",
        15.0,
        "pets",
        "high",
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_persists_and_get_round_trips(service: TestService) -> eyre::Result<()> {
    let poster = UserId::new();
    let posted = service
        .post(poster, request().with_estimated_time("1 hour"))
        .await?;

    let fetched = service.get(posted.id()).await?;

    ensure!(fetched == posted);
    ensure!(fetched.status() == ChoreStatus::Active);
    ensure!(fetched.urgency() == Urgency::High);
    ensure!(fetched.estimated_time() == Some("1 hour"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_rejects_an_unknown_urgency(service: TestService) -> eyre::Result<()> {
    let bad = PostChoreRequest::new("T", "D", "L", 10.0, "misc", "immediately");

    let result = service.post(UserId::new(), bad).await;

    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(
            ChoreDomainError::InvalidUrgency(_)
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_parses_a_bare_date_as_midnight_utc(service: TestService) -> eyre::Result<()> {
    let posted = service
        .post(UserId::new(), request().with_due_date("2026-09-01"))
        .await?;

    let due = posted
        .due_date()
        .ok_or_else(|| eyre::eyre!("due date missing"))?;
    ensure!((due.year(), due.month(), due.day()) == (2026, 9, 1));
    ensure!(due.hour() == 0 && due.minute() == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_rejects_an_unparseable_due_date(service: TestService) -> eyre::Result<()> {
    let result = service
        .post(UserId::new(), request().with_due_date("next tuesday"))
        .await;

    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(
            ChoreDomainError::InvalidDueDate(_)
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_then_complete_walks_the_happy_path(service: TestService) -> eyre::Result<()> {
    let poster = UserId::new();
    let accepter = UserId::new();
    let posted = service.post(poster, request()).await?;

    let accepted = service.accept(accepter, posted.id()).await?;
    ensure!(accepted.status() == ChoreStatus::Accepted);
    ensure!(accepted.accepted_by() == Some(accepter));

    let completed = service.complete(accepter, posted.id()).await?;
    ensure!(completed.status() == ChoreStatus::Completed);
    ensure!(completed.completed_by() == Some(accepter));
    ensure!(completed.completed_at().is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_of_a_missing_chore_is_not_found(service: TestService) -> eyre::Result<()> {
    let result = service.accept(UserId::new(), ChoreId::new()).await;

    ensure!(matches!(result, Err(ChoreLifecycleError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_accept_sees_not_available(service: TestService) -> eyre::Result<()> {
    let posted = service.post(UserId::new(), request()).await?;
    service.accept(UserId::new(), posted.id()).await?;

    let result = service.accept(UserId::new(), posted.id()).await;

    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAvailable {
            status: ChoreStatus::Accepted,
            ..
        }))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn poster_cannot_accept_their_own_chore(service: TestService) -> eyre::Result<()> {
    let poster = UserId::new();
    let posted = service.post(poster, request()).await?;

    let result = service.accept(poster, posted.id()).await;

    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(
            ChoreDomainError::CannotAcceptOwnChore(_)
        ))
    ));

    let unchanged = service.get(posted.id()).await?;
    ensure!(unchanged.status() == ChoreStatus::Active);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_accepter_may_complete(service: TestService) -> eyre::Result<()> {
    let posted = service.post(UserId::new(), request()).await?;
    service.accept(UserId::new(), posted.id()).await?;

    let result = service.complete(UserId::new(), posted.id()).await;

    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAccepter(_)))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancel_is_terminal_and_blocks_acceptance(service: TestService) -> eyre::Result<()> {
    let poster = UserId::new();
    let posted = service.post(poster, request()).await?;

    let cancelled = service.cancel(poster, posted.id()).await?;
    ensure!(cancelled.status() == ChoreStatus::Cancelled);

    let result = service.accept(UserId::new(), posted.id()).await;
    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAvailable {
            status: ChoreStatus::Cancelled,
            ..
        }))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancel_rejects_a_non_poster(service: TestService) -> eyre::Result<()> {
    let posted = service.post(UserId::new(), request()).await?;

    let result = service.cancel(UserId::new(), posted.id()).await;

    ensure!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotPoster(_)))
    ));
    Ok(())
}
