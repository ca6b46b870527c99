//! End-to-end lifecycle scenarios over the in-memory adapters.
//!
//! Exercises the full post/accept/complete/cancel flows through the service
//! layer, including the concurrent-accept race that the conditional update
//! must serialise.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use chorerun::chore::{
    adapters::memory::InMemoryChoreRepository,
    domain::{ChoreDomainError, ChoreStatus},
    ports::{ChoreFilter, Page},
    services::{ChoreLifecycleError, ChoreLifecycleService, ChoreQueryService, PostChoreRequest},
};
use chorerun::identity::domain::UserId;
use mockable::DefaultClock;

type Lifecycle = ChoreLifecycleService<InMemoryChoreRepository, DefaultClock>;
type Listing = ChoreQueryService<InMemoryChoreRepository>;

fn services() -> (Arc<Lifecycle>, Listing) {
    let repository = Arc::new(InMemoryChoreRepository::new());
    let lifecycle = Arc::new(ChoreLifecycleService::new(
        Arc::clone(&repository),
        Arc::new(DefaultClock),
    ));
    (lifecycle, ChoreQueryService::new(repository))
}

fn request(title: &str) -> PostChoreRequest {
    PostChoreRequest::new(title, "description", "Leeds", 25.0, "misc", "medium")
}

#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_updates_listings_at_each_step() {
    let (lifecycle, listing) = services();
    let poster = UserId::new();
    let worker = UserId::new();

    let posted = lifecycle
        .post(poster, request("Mow the lawn"))
        .await
        .expect("post should succeed");

    let active = listing
        .browse(&ChoreFilter::default(), Page::new(1, 20).expect("valid page"))
        .await
        .expect("browse should succeed");
    assert_eq!(active.len(), 1);

    lifecycle
        .accept(worker, posted.id())
        .await
        .expect("accept should succeed");

    // Accepted chores drop out of the default (active) listing.
    let after_accept = listing
        .browse(&ChoreFilter::default(), Page::new(1, 20).expect("valid page"))
        .await
        .expect("browse should succeed");
    assert!(after_accept.is_empty());

    let completed = lifecycle
        .complete(worker, posted.id())
        .await
        .expect("complete should succeed");
    assert_eq!(completed.status(), ChoreStatus::Completed);
    assert_eq!(completed.completed_by(), completed.accepted_by());
}

#[tokio::test(flavor = "multi_thread")]
async fn posters_cannot_work_their_own_chores() {
    let (lifecycle, _) = services();
    let poster = UserId::new();
    let posted = lifecycle
        .post(poster, request("Clean windows"))
        .await
        .expect("post should succeed");

    let result = lifecycle.accept(poster, posted.id()).await;

    assert!(matches!(
        result,
        Err(ChoreLifecycleError::Domain(
            ChoreDomainError::CannotAcceptOwnChore(_)
        ))
    ));
    let unchanged = lifecycle.get(posted.id()).await.expect("chore exists");
    assert_eq!(unchanged.status(), ChoreStatus::Active);
}

#[tokio::test(flavor = "multi_thread")]
async fn a_late_accept_reads_as_not_available() {
    let (lifecycle, _) = services();
    let posted = lifecycle
        .post(UserId::new(), request("Walk the dog"))
        .await
        .expect("post should succeed");

    lifecycle
        .accept(UserId::new(), posted.id())
        .await
        .expect("first accept should succeed");
    let late = lifecycle.accept(UserId::new(), posted.id()).await;

    assert!(matches!(
        late,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAvailable {
            status: ChoreStatus::Accepted,
            ..
        }))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn only_the_accepter_completes_and_only_the_poster_cancels() {
    let (lifecycle, _) = services();
    let poster = UserId::new();
    let worker = UserId::new();
    let posted = lifecycle
        .post(poster, request("Paint shed"))
        .await
        .expect("post should succeed");

    let cancel_by_stranger = lifecycle.cancel(worker, posted.id()).await;
    assert!(matches!(
        cancel_by_stranger,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotPoster(_)))
    ));

    lifecycle
        .accept(worker, posted.id())
        .await
        .expect("accept should succeed");

    let complete_by_poster = lifecycle.complete(poster, posted.id()).await;
    assert!(matches!(
        complete_by_poster,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAccepter(_)))
    ));

    let cancel_after_accept = lifecycle.cancel(poster, posted.id()).await;
    assert!(matches!(
        cancel_after_accept,
        Err(ChoreLifecycleError::Domain(
            ChoreDomainError::NotCancellable { .. }
        ))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelled_chores_leave_the_listing_and_stay_terminal() {
    let (lifecycle, listing) = services();
    let poster = UserId::new();
    let posted = lifecycle
        .post(poster, request("Tidy garage"))
        .await
        .expect("post should succeed");

    let cancelled = lifecycle
        .cancel(poster, posted.id())
        .await
        .expect("cancel should succeed");
    assert_eq!(cancelled.status(), ChoreStatus::Cancelled);

    let active = listing
        .browse(&ChoreFilter::default(), Page::new(1, 20).expect("valid page"))
        .await
        .expect("browse should succeed");
    assert!(active.is_empty());

    let accept_after_cancel = lifecycle.accept(UserId::new(), posted.id()).await;
    assert!(matches!(
        accept_after_cancel,
        Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAvailable {
            status: ChoreStatus::Cancelled,
            ..
        }))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_accepts_have_exactly_one_winner() {
    let (lifecycle, _) = services();
    let posted = lifecycle
        .post(UserId::new(), request("Fix fence"))
        .await
        .expect("post should succeed");
    let chore_id = posted.id();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let racing = Arc::clone(&lifecycle);
        let contender = UserId::new();
        handles.push(tokio::spawn(async move {
            (contender, racing.accept(contender, chore_id).await)
        }));
    }

    let mut winners = Vec::new();
    for handle in handles {
        let (contender, result) = handle.await.expect("task should not panic");
        match result {
            Ok(chore) => {
                assert_eq!(chore.accepted_by(), Some(contender));
                winners.push(contender);
            }
            Err(ChoreLifecycleError::Domain(ChoreDomainError::NotAvailable { .. })) => {}
            Err(other) => panic!("unexpected accept failure: {other}"),
        }
    }
    assert_eq!(winners.len(), 1);

    let stored = lifecycle.get(chore_id).await.expect("chore exists");
    assert_eq!(stored.status(), ChoreStatus::Accepted);
    assert_eq!(stored.accepted_by(), winners.first().copied());
}
