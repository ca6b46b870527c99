//! Tests for chore application records.

use std::sync::Arc;

use crate::chore::{
    adapters::memory::{InMemoryChoreApplicationRepository, InMemoryChoreRepository},
    domain::{ApplicationStatus, ChoreId},
    services::{
        ChoreApplicationError, ChoreApplicationService, ChoreLifecycleService, PostChoreRequest,
    },
};
use crate::identity::domain::UserId;
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestLifecycle = ChoreLifecycleService<InMemoryChoreRepository, DefaultClock>;
type TestApplications = ChoreApplicationService<
    InMemoryChoreRepository,
    InMemoryChoreApplicationRepository,
    DefaultClock,
>;

#[fixture]
fn services() -> (TestLifecycle, TestApplications) {
    let chores = Arc::new(InMemoryChoreRepository::new());
    let clock = Arc::new(DefaultClock);
    let lifecycle = ChoreLifecycleService::new(Arc::clone(&chores), Arc::clone(&clock));
    let applications = ChoreApplicationService::new(
        chores,
        Arc::new(InMemoryChoreApplicationRepository::new()),
        clock,
    );
    (lifecycle, applications)
}

fn request() -> PostChoreRequest {
    PostChoreRequest::new("Clean gutters", "Both sides", "York", 40.0, "diy", "low")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_records_a_pending_application(
    services: (TestLifecycle, TestApplications),
) -> eyre::Result<()> {
    let (lifecycle, applications) = services;
    let posted = lifecycle.post(UserId::new(), request()).await?;
    let applicant = UserId::new();

    let application = applications
        .apply(applicant, posted.id(), Some("I have a ladder".to_owned()))
        .await?;

    ensure!(application.status() == ApplicationStatus::Pending);
    ensure!(application.applicant() == applicant);
    ensure!(application.message() == Some("I have a ladder"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn applications_list_oldest_first(
    services: (TestLifecycle, TestApplications),
) -> eyre::Result<()> {
    let (lifecycle, applications) = services;
    let posted = lifecycle.post(UserId::new(), request()).await?;
    let first = applications.apply(UserId::new(), posted.id(), None).await?;
    let second = applications.apply(UserId::new(), posted.id(), None).await?;

    let listed = applications.applications_for(posted.id()).await?;

    let ids: Vec<_> = listed.iter().map(|application| application.id()).collect();
    ensure!(ids == [first.id(), second.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_to_a_missing_chore_is_rejected(
    services: (TestLifecycle, TestApplications),
) -> eyre::Result<()> {
    let (_, applications) = services;

    let result = applications.apply(UserId::new(), ChoreId::new(), None).await;

    ensure!(matches!(
        result,
        Err(ChoreApplicationError::ChoreNotFound(_))
    ));
    Ok(())
}
