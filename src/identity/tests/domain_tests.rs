//! Domain-focused tests for email validation and the user aggregate.

use crate::identity::domain::{EmailAddress, IdentityDomainError, ProfileUpdate, User};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn email_is_trimmed_and_lowercased() -> eyre::Result<()> {
    let email = EmailAddress::new("  Alice@Example.COM ")?;
    ensure!(email.as_str() == "alice@example.com");
    Ok(())
}

#[rstest]
#[case("no-at-sign")]
#[case("@missing-local")]
#[case("missing-domain@")]
#[case("two@at@signs")]
#[case("spaced out@example.com")]
#[case("")]
fn malformed_emails_are_rejected(#[case] raw: &str) {
    assert!(matches!(
        EmailAddress::new(raw),
        Err(IdentityDomainError::InvalidEmail(_))
    ));
}

#[rstest]
fn register_rejects_an_empty_display_name(clock: DefaultClock) -> eyre::Result<()> {
    let email = EmailAddress::new("bob@example.com")?;

    let result = User::register("   ", email, "phc-hash", &clock);

    ensure!(matches!(
        result,
        Err(IdentityDomainError::EmptyDisplayName)
    ));
    Ok(())
}

#[rstest]
fn register_populates_optional_fields_via_builders(clock: DefaultClock) -> eyre::Result<()> {
    let email = EmailAddress::new("carol@example.com")?;
    let user = User::register("Carol", email, "phc-hash", &clock)?
        .with_phone("07700 900000")
        .with_location("Bristol");

    ensure!(user.name() == "Carol");
    ensure!(user.phone() == Some("07700 900000"));
    ensure!(user.location() == Some("Bristol"));
    ensure!(user.bio().is_none());
    Ok(())
}

#[rstest]
fn profile_update_leaves_absent_fields_unchanged(clock: DefaultClock) -> eyre::Result<()> {
    let email = EmailAddress::new("dan@example.com")?;
    let mut user = User::register("Dan", email, "phc-hash", &clock)?.with_bio("old bio");

    user.apply_update(ProfileUpdate {
        location: Some("Glasgow".to_owned()),
        ..ProfileUpdate::default()
    })?;

    ensure!(user.name() == "Dan");
    ensure!(user.location() == Some("Glasgow"));
    ensure!(user.bio() == Some("old bio"));
    Ok(())
}

#[rstest]
fn profile_update_rejects_an_empty_name(clock: DefaultClock) -> eyre::Result<()> {
    let email = EmailAddress::new("erin@example.com")?;
    let mut user = User::register("Erin", email, "phc-hash", &clock)?;

    let result = user.apply_update(ProfileUpdate {
        name: Some("  ".to_owned()),
        ..ProfileUpdate::default()
    });

    ensure!(matches!(
        result,
        Err(IdentityDomainError::EmptyDisplayName)
    ));
    ensure!(user.name() == "Erin");
    Ok(())
}
