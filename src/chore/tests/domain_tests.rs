//! Domain-focused tests for chore validation and transition guards.

use crate::chore::domain::{
    Chore, ChoreDetails, ChoreDomainError, ChoreStatus, ParticipantRole, Payment, Urgency,
};
use crate::identity::domain::UserId;
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn details() -> eyre::Result<ChoreDetails> {
    Ok(ChoreDetails::new(
        "Mow the lawn",
        "Front and back garden",
        "Leeds",
        Payment::new(25.0)?,
        "gardening",
        Urgency::Medium,
    )?)
}

#[rstest]
fn details_reject_empty_required_fields() -> eyre::Result<()> {
    let payment = Payment::new(25.0)?;
    let result = ChoreDetails::new("   ", "desc", "Leeds", payment, "gardening", Urgency::Low);
    assert_eq!(result, Err(ChoreDomainError::EmptyField("title")));

    let result = ChoreDetails::new("Title", "desc", "Leeds", payment, "  ", Urgency::Low);
    assert_eq!(result, Err(ChoreDomainError::EmptyField("category")));
    Ok(())
}

#[rstest]
#[case(0.0)]
#[case(-3.5)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn payment_rejects_non_positive_or_non_finite(#[case] amount: f64) {
    assert!(matches!(
        Payment::new(amount),
        Err(ChoreDomainError::NonPositivePayment(_))
    ));
}

#[rstest]
fn urgency_parses_case_insensitively() -> eyre::Result<()> {
    ensure!(Urgency::try_from(" HIGH ")? == Urgency::High);
    ensure!(Urgency::try_from("low")? == Urgency::Low);
    ensure!(Urgency::try_from("urgent").is_err());
    Ok(())
}

#[rstest]
fn status_round_trips_and_knows_terminal_states() -> eyre::Result<()> {
    for status in [
        ChoreStatus::Active,
        ChoreStatus::Accepted,
        ChoreStatus::Completed,
        ChoreStatus::Cancelled,
    ] {
        ensure!(ChoreStatus::try_from(status.as_str())? == status);
    }
    ensure!(!ChoreStatus::Active.is_terminal());
    ensure!(!ChoreStatus::Accepted.is_terminal());
    ensure!(ChoreStatus::Completed.is_terminal());
    ensure!(ChoreStatus::Cancelled.is_terminal());
    Ok(())
}

#[rstest]
fn participant_role_parses_listing_types() -> eyre::Result<()> {
    ensure!(ParticipantRole::try_from("posted")? == ParticipantRole::Posted);
    ensure!(ParticipantRole::try_from(" All ")? == ParticipantRole::All);
    ensure!(ParticipantRole::try_from("owner").is_err());
    Ok(())
}

#[rstest]
fn post_creates_an_active_chore(clock: DefaultClock) -> eyre::Result<()> {
    let poster = UserId::new();
    let chore = Chore::post(poster, details()?, &clock);

    ensure!(chore.status() == ChoreStatus::Active);
    ensure!(chore.posted_by() == poster);
    ensure!(chore.accepted_by().is_none());
    ensure!(chore.accepted_at().is_none());
    ensure!(chore.completed_by().is_none());
    ensure!(chore.completed_at().is_none());
    Ok(())
}

#[rstest]
fn accept_stamps_accepter_and_timestamp_together(clock: DefaultClock) -> eyre::Result<()> {
    let mut chore = Chore::post(UserId::new(), details()?, &clock);
    let accepter = UserId::new();

    chore.accept(accepter, &clock)?;

    ensure!(chore.status() == ChoreStatus::Accepted);
    ensure!(chore.accepted_by() == Some(accepter));
    ensure!(chore.accepted_at().is_some());
    Ok(())
}

#[rstest]
fn accept_rejects_the_poster(clock: DefaultClock) -> eyre::Result<()> {
    let poster = UserId::new();
    let mut chore = Chore::post(poster, details()?, &clock);

    let result = chore.accept(poster, &clock);

    ensure!(matches!(
        result,
        Err(ChoreDomainError::CannotAcceptOwnChore(_))
    ));
    ensure!(chore.status() == ChoreStatus::Active);
    Ok(())
}

#[rstest]
fn accept_rejects_a_non_active_chore(clock: DefaultClock) -> eyre::Result<()> {
    let mut chore = Chore::post(UserId::new(), details()?, &clock);
    chore.accept(UserId::new(), &clock)?;

    let result = chore.accept(UserId::new(), &clock);

    ensure!(matches!(
        result,
        Err(ChoreDomainError::NotAvailable {
            status: ChoreStatus::Accepted,
            ..
        })
    ));
    Ok(())
}

#[rstest]
fn complete_requires_the_accepted_state(clock: DefaultClock) -> eyre::Result<()> {
    let mut chore = Chore::post(UserId::new(), details()?, &clock);

    let result = chore.complete(UserId::new(), &clock);

    ensure!(matches!(
        result,
        Err(ChoreDomainError::NotAccepted {
            status: ChoreStatus::Active,
            ..
        })
    ));
    Ok(())
}

#[rstest]
fn complete_rejects_anyone_but_the_accepter(clock: DefaultClock) -> eyre::Result<()> {
    let mut chore = Chore::post(UserId::new(), details()?, &clock);
    chore.accept(UserId::new(), &clock)?;

    let result = chore.complete(UserId::new(), &clock);

    ensure!(matches!(result, Err(ChoreDomainError::NotAccepter(_))));
    Ok(())
}

#[rstest]
fn complete_stamps_completer_equal_to_accepter(clock: DefaultClock) -> eyre::Result<()> {
    let mut chore = Chore::post(UserId::new(), details()?, &clock);
    let accepter = UserId::new();
    chore.accept(accepter, &clock)?;

    chore.complete(accepter, &clock)?;

    ensure!(chore.status() == ChoreStatus::Completed);
    ensure!(chore.completed_by() == chore.accepted_by());
    ensure!(chore.completed_at().is_some());
    Ok(())
}

#[rstest]
fn cancel_is_poster_only_on_active_chores(clock: DefaultClock) -> eyre::Result<()> {
    let poster = UserId::new();
    let mut chore = Chore::post(poster, details()?, &clock);

    let result = chore.cancel(UserId::new());
    ensure!(matches!(result, Err(ChoreDomainError::NotPoster(_))));

    chore.cancel(poster)?;
    ensure!(chore.status() == ChoreStatus::Cancelled);

    let result = chore.cancel(poster);
    ensure!(matches!(result, Err(ChoreDomainError::NotCancellable { .. })));
    Ok(())
}

#[rstest]
fn terminal_states_admit_no_further_transitions(clock: DefaultClock) -> eyre::Result<()> {
    let poster = UserId::new();
    let accepter = UserId::new();
    let mut chore = Chore::post(poster, details()?, &clock);
    chore.accept(accepter, &clock)?;
    chore.complete(accepter, &clock)?;

    ensure!(chore.accept(UserId::new(), &clock).is_err());
    ensure!(chore.complete(accepter, &clock).is_err());
    ensure!(chore.cancel(poster).is_err());
    ensure!(chore.status() == ChoreStatus::Completed);
    Ok(())
}
