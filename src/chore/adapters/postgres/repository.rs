//! `PostgreSQL` repository implementations for chore persistence.
//!
//! Lifecycle transitions are single conditional `UPDATE` statements keyed on
//! the expected status, so the status check and the write cannot interleave
//! with a racing caller.

use super::{
    models::{ApplicationRow, ChoreRow, NewApplicationRow, NewChoreRow},
    schema::{chore_applications, chores},
};
use crate::chore::{
    domain::{
        ApplicationId, ApplicationStatus, Chore, ChoreApplication, ChoreId, ChoreStatus,
        ParticipantRole, Payment, PersistedApplicationData, PersistedChoreData, Urgency,
    },
    ports::{
        ApplicationRepositoryError, ApplicationRepositoryResult, ChoreApplicationRepository,
        ChoreFilter, ChoreRepository, ChoreRepositoryError, ChoreRepositoryResult, Page,
    },
};
use crate::identity::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by chore adapters.
pub type ChorePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed chore repository.
#[derive(Debug, Clone)]
pub struct PostgresChoreRepository {
    pool: ChorePgPool,
}

impl PostgresChoreRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ChorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ChoreRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ChoreRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ChoreRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ChoreRepositoryError::persistence)?
    }
}

#[async_trait]
impl ChoreRepository for PostgresChoreRepository {
    async fn store(&self, chore: &Chore) -> ChoreRepositoryResult<()> {
        let chore_id = chore.id();
        let new_row = to_new_row(chore);

        self.run_blocking(move |connection| {
            diesel::insert_into(chores::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ChoreRepositoryError::DuplicateChore(chore_id)
                    }
                    _ => ChoreRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ChoreId) -> ChoreRepositoryResult<Option<Chore>> {
        self.run_blocking(move |connection| {
            let row = chores::table
                .filter(chores::id.eq(id.into_inner()))
                .select(ChoreRow::as_select())
                .first::<ChoreRow>(connection)
                .optional()
                .map_err(ChoreRepositoryError::persistence)?;
            row.map(row_to_chore).transpose()
        })
        .await
    }

    async fn update_transition(
        &self,
        chore: &Chore,
        expected: ChoreStatus,
    ) -> ChoreRepositoryResult<()> {
        let chore_id = chore.id();
        let status = chore.status().as_str().to_owned();
        let accepted_by = chore.accepted_by().map(UserId::into_inner);
        let completed_by = chore.completed_by().map(UserId::into_inner);
        let accepted_at = chore.accepted_at();
        let completed_at = chore.completed_at();

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                chores::table.filter(
                    chores::id
                        .eq(chore_id.into_inner())
                        .and(chores::status.eq(expected.as_str())),
                ),
            )
            .set((
                chores::status.eq(&status),
                chores::accepted_by.eq(accepted_by),
                chores::accepted_at.eq(accepted_at),
                chores::completed_by.eq(completed_by),
                chores::completed_at.eq(completed_at),
            ))
            .execute(connection)
            .map_err(ChoreRepositoryError::persistence)?;

            if updated == 0 {
                // Zero rows means the chore is gone or its status moved on;
                // a follow-up read tells the two apart.
                let current = chores::table
                    .filter(chores::id.eq(chore_id.into_inner()))
                    .select(chores::status)
                    .first::<String>(connection)
                    .optional()
                    .map_err(ChoreRepositoryError::persistence)?;
                return match current {
                    None => Err(ChoreRepositoryError::NotFound(chore_id)),
                    Some(actual) => Err(ChoreRepositoryError::StatusConflict {
                        chore_id,
                        actual: ChoreStatus::try_from(actual.as_str())
                            .map_err(ChoreRepositoryError::persistence)?,
                    }),
                };
            }
            Ok(())
        })
        .await
    }

    async fn list(&self, filter: &ChoreFilter, page: Page) -> ChoreRepositoryResult<Vec<Chore>> {
        let criteria = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = chores::table
                .filter(chores::status.eq(criteria.status.as_str()))
                .into_boxed();
            if let Some(category) = criteria.category {
                query = query.filter(chores::category.eq(category));
            }
            if let Some(location) = criteria.location {
                query = query.filter(chores::location.ilike(substring_pattern(&location)));
            }
            let rows = query
                .order(chores::posted_at.desc())
                .limit(page.limit())
                .offset(page.offset())
                .select(ChoreRow::as_select())
                .load::<ChoreRow>(connection)
                .map_err(ChoreRepositoryError::persistence)?;
            rows.into_iter().map(row_to_chore).collect()
        })
        .await
    }

    async fn list_for_user(
        &self,
        user: UserId,
        role: ParticipantRole,
    ) -> ChoreRepositoryResult<Vec<Chore>> {
        let user_id = user.into_inner();
        self.run_blocking(move |connection| {
            let mut query = chores::table.into_boxed();
            query = match role {
                ParticipantRole::Posted => query.filter(chores::posted_by.eq(user_id)),
                ParticipantRole::Accepted => query.filter(chores::accepted_by.eq(user_id)),
                ParticipantRole::Completed => query.filter(chores::completed_by.eq(user_id)),
                // One OR-filtered query keeps the union de-duplicated and
                // sorted as a whole.
                ParticipantRole::All => query.filter(
                    chores::posted_by
                        .eq(user_id)
                        .or(chores::accepted_by.eq(user_id))
                        .or(chores::completed_by.eq(user_id)),
                ),
            };
            let rows = query
                .order(chores::posted_at.desc())
                .select(ChoreRow::as_select())
                .load::<ChoreRow>(connection)
                .map_err(ChoreRepositoryError::persistence)?;
            rows.into_iter().map(row_to_chore).collect()
        })
        .await
    }
}

fn to_new_row(chore: &Chore) -> NewChoreRow {
    NewChoreRow {
        id: chore.id().into_inner(),
        title: chore.title().to_owned(),
        description: chore.description().to_owned(),
        location: chore.location().to_owned(),
        payment: chore.payment().amount(),
        category: chore.category().to_owned(),
        urgency: chore.urgency().as_str().to_owned(),
        estimated_time: chore.estimated_time().map(str::to_owned),
        status: chore.status().as_str().to_owned(),
        posted_by: chore.posted_by().into_inner(),
        accepted_by: chore.accepted_by().map(UserId::into_inner),
        completed_by: chore.completed_by().map(UserId::into_inner),
        posted_at: chore.posted_at(),
        accepted_at: chore.accepted_at(),
        completed_at: chore.completed_at(),
        due_date: chore.due_date(),
    }
}

fn row_to_chore(row: ChoreRow) -> ChoreRepositoryResult<Chore> {
    let status = ChoreStatus::try_from(row.status.as_str())
        .map_err(ChoreRepositoryError::persistence)?;
    let urgency =
        Urgency::try_from(row.urgency.as_str()).map_err(ChoreRepositoryError::persistence)?;
    let payment = Payment::new(row.payment).map_err(ChoreRepositoryError::persistence)?;

    let data = PersistedChoreData {
        id: ChoreId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        location: row.location,
        payment,
        category: row.category,
        urgency,
        estimated_time: row.estimated_time,
        due_date: row.due_date,
        status,
        posted_by: UserId::from_uuid(row.posted_by),
        accepted_by: row.accepted_by.map(UserId::from_uuid),
        completed_by: row.completed_by.map(UserId::from_uuid),
        posted_at: row.posted_at,
        accepted_at: row.accepted_at,
        completed_at: row.completed_at,
    };
    Ok(Chore::from_persisted(data))
}

/// Builds an ILIKE pattern matching `needle` as a substring, escaping the
/// wildcard characters.
fn substring_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// `PostgreSQL`-backed chore application repository.
#[derive(Debug, Clone)]
pub struct PostgresChoreApplicationRepository {
    pool: ChorePgPool,
}

impl PostgresChoreApplicationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ChorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ApplicationRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ApplicationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ApplicationRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ApplicationRepositoryError::persistence)?
    }
}

#[async_trait]
impl ChoreApplicationRepository for PostgresChoreApplicationRepository {
    async fn store(&self, application: &ChoreApplication) -> ApplicationRepositoryResult<()> {
        let application_id = application.id();
        let new_row = NewApplicationRow {
            id: application.id().into_inner(),
            chore_id: application.chore_id().into_inner(),
            applicant_id: application.applicant().into_inner(),
            message: application.message().map(str::to_owned),
            status: application.status().as_str().to_owned(),
            applied_at: application.applied_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(chore_applications::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ApplicationRepositoryError::DuplicateApplication(application_id)
                    }
                    _ => ApplicationRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_chore(
        &self,
        chore_id: ChoreId,
    ) -> ApplicationRepositoryResult<Vec<ChoreApplication>> {
        self.run_blocking(move |connection| {
            let rows = chore_applications::table
                .filter(chore_applications::chore_id.eq(chore_id.into_inner()))
                .order(chore_applications::applied_at.asc())
                .select(ApplicationRow::as_select())
                .load::<ApplicationRow>(connection)
                .map_err(ApplicationRepositoryError::persistence)?;
            rows.into_iter().map(row_to_application).collect()
        })
        .await
    }
}

fn row_to_application(row: ApplicationRow) -> ApplicationRepositoryResult<ChoreApplication> {
    let status = ApplicationStatus::try_from(row.status.as_str())
        .map_err(ApplicationRepositoryError::persistence)?;
    let data = PersistedApplicationData {
        id: ApplicationId::from_uuid(row.id),
        chore_id: ChoreId::from_uuid(row.chore_id),
        applicant: UserId::from_uuid(row.applicant_id),
        message: row.message,
        status,
        applied_at: row.applied_at,
    };
    Ok(ChoreApplication::from_persisted(data))
}
