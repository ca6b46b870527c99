//! Tests for review submission guards and derived ratings.

use std::sync::Arc;

use crate::chore::{
    adapters::memory::InMemoryChoreRepository,
    domain::ChoreId,
    services::{ChoreLifecycleService, PostChoreRequest},
};
use crate::identity::domain::UserId;
use crate::review::{
    adapters::memory::InMemoryReviewRepository,
    domain::ReviewDomainError,
    services::{AddReviewRequest, NEUTRAL_RATING, ReputationError, ReputationService},
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestLifecycle = ChoreLifecycleService<InMemoryChoreRepository, DefaultClock>;
type TestReputation =
    ReputationService<InMemoryChoreRepository, InMemoryReviewRepository, DefaultClock>;

struct Setup {
    lifecycle: TestLifecycle,
    reputation: TestReputation,
}

#[fixture]
fn setup() -> Setup {
    let chores = Arc::new(InMemoryChoreRepository::new());
    let clock = Arc::new(DefaultClock);
    Setup {
        lifecycle: ChoreLifecycleService::new(Arc::clone(&chores), Arc::clone(&clock)),
        reputation: ReputationService::new(
            chores,
            Arc::new(InMemoryReviewRepository::new()),
            clock,
        ),
    }
}

struct CompletedChore {
    chore_id: ChoreId,
    poster: UserId,
    completer: UserId,
}

async fn complete_a_chore(lifecycle: &TestLifecycle) -> eyre::Result<CompletedChore> {
    complete_a_chore_by(lifecycle, UserId::new()).await
}

async fn complete_a_chore_by(
    lifecycle: &TestLifecycle,
    completer: UserId,
) -> eyre::Result<CompletedChore> {
    let poster = UserId::new();
    let request =
        PostChoreRequest::new("Paint fence", "One coat", "Sheffield", 30.0, "diy", "medium");
    let posted = lifecycle.post(poster, request).await?;
    lifecycle.accept(completer, posted.id()).await?;
    lifecycle.complete(completer, posted.id()).await?;
    Ok(CompletedChore {
        chore_id: posted.id(),
        poster,
        completer,
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn poster_reviews_the_completer(setup: Setup) -> eyre::Result<()> {
    let done = complete_a_chore(&setup.lifecycle).await?;

    let review = setup
        .reputation
        .add_review(
            done.poster,
            AddReviewRequest::new(done.chore_id, 5).with_comment("spotless"),
        )
        .await?;

    ensure!(review.reviewer() == done.poster);
    ensure!(review.reviewee() == done.completer);
    ensure!(review.rating().value() == 5);
    ensure!(review.comment() == Some("spotless"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completer_reviews_the_poster(setup: Setup) -> eyre::Result<()> {
    let done = complete_a_chore(&setup.lifecycle).await?;

    let review = setup
        .reputation
        .add_review(done.completer, AddReviewRequest::new(done.chore_id, 4))
        .await?;

    ensure!(review.reviewee() == done.poster);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_participants_may_not_review(setup: Setup) -> eyre::Result<()> {
    let done = complete_a_chore(&setup.lifecycle).await?;

    let result = setup
        .reputation
        .add_review(UserId::new(), AddReviewRequest::new(done.chore_id, 3))
        .await;

    ensure!(matches!(result, Err(ReputationError::NotParticipant)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reviews_require_a_completed_chore(setup: Setup) -> eyre::Result<()> {
    let poster = UserId::new();
    let request =
        PostChoreRequest::new("Wash car", "Inside too", "Derby", 18.0, "cleaning", "low");
    let posted = setup.lifecycle.post(poster, request).await?;

    let result = setup
        .reputation
        .add_review(poster, AddReviewRequest::new(posted.id(), 4))
        .await;

    ensure!(matches!(
        result,
        Err(ReputationError::ChoreNotCompleted { .. })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reviews_of_a_missing_chore_are_rejected(setup: Setup) -> eyre::Result<()> {
    let result = setup
        .reputation
        .add_review(UserId::new(), AddReviewRequest::new(ChoreId::new(), 4))
        .await;

    ensure!(matches!(result, Err(ReputationError::ChoreNotFound(_))));
    Ok(())
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(-1)]
#[tokio::test(flavor = "multi_thread")]
async fn out_of_range_ratings_are_rejected(setup: Setup, #[case] rating: i32) -> eyre::Result<()> {
    let done = complete_a_chore(&setup.lifecycle).await?;

    let result = setup
        .reputation
        .add_review(done.poster, AddReviewRequest::new(done.chore_id, rating))
        .await;

    ensure!(matches!(
        result,
        Err(ReputationError::Domain(
            ReviewDomainError::RatingOutOfRange(_)
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_review_per_chore_per_reviewer(setup: Setup) -> eyre::Result<()> {
    let done = complete_a_chore(&setup.lifecycle).await?;
    setup
        .reputation
        .add_review(done.poster, AddReviewRequest::new(done.chore_id, 5))
        .await?;

    let repeat = setup
        .reputation
        .add_review(done.poster, AddReviewRequest::new(done.chore_id, 1))
        .await;
    ensure!(matches!(repeat, Err(ReputationError::AlreadyReviewed(_))));

    // The other participant still gets their own review.
    setup
        .reputation
        .add_review(done.completer, AddReviewRequest::new(done.chore_id, 4))
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rating_is_the_mean_of_received_reviews(setup: Setup) -> eyre::Result<()> {
    let worker = UserId::new();
    ensure!((setup.reputation.rating_for(worker).await? - NEUTRAL_RATING).abs() < f64::EPSILON);

    // The same worker completes two chores and is rated 5 and 2.
    let first = complete_a_chore_by(&setup.lifecycle, worker).await?;
    let second = complete_a_chore_by(&setup.lifecycle, worker).await?;
    setup
        .reputation
        .add_review(first.poster, AddReviewRequest::new(first.chore_id, 5))
        .await?;
    setup
        .reputation
        .add_review(second.poster, AddReviewRequest::new(second.chore_id, 2))
        .await?;

    let rating = setup.reputation.rating_for(worker).await?;
    ensure!((rating - 3.5).abs() < f64::EPSILON);
    Ok(())
}
