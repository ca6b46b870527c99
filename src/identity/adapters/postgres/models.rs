//! Row types mapping identity aggregates onto the Diesel schema.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Row loaded from the `users` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// PHC-formatted credential hash.
    pub password_hash: String,
    /// Phone number, if provided.
    pub phone: Option<String>,
    /// Location, if provided.
    pub location: Option<String>,
    /// Bio, if provided.
    pub bio: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row inserted into the `users` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// PHC-formatted credential hash.
    pub password_hash: String,
    /// Phone number, if provided.
    pub phone: Option<String>,
    /// Location, if provided.
    pub location: Option<String>,
    /// Bio, if provided.
    pub bio: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
