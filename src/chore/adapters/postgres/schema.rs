//! Diesel schema for chore persistence.

diesel::table! {
    /// Chore records with lifecycle status and participant references.
    chores (id) {
        /// Chore identifier.
        id -> Uuid,
        /// Short title.
        #[max_length = 200]
        title -> Varchar,
        /// Full description.
        description -> Text,
        /// Where the chore takes place.
        #[max_length = 200]
        location -> Varchar,
        /// Offered payment amount.
        payment -> Float8,
        /// Category label.
        #[max_length = 100]
        category -> Varchar,
        /// Urgency label.
        #[max_length = 50]
        urgency -> Varchar,
        /// Optional free-form time estimate.
        #[max_length = 50]
        estimated_time -> Nullable<Varchar>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Poster reference.
        posted_by -> Uuid,
        /// Accepter reference.
        accepted_by -> Nullable<Uuid>,
        /// Completer reference.
        completed_by -> Nullable<Uuid>,
        /// Posting timestamp.
        posted_at -> Timestamptz,
        /// Acceptance timestamp.
        accepted_at -> Nullable<Timestamptz>,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Bids on chores, loosely coupled to the lifecycle.
    chore_applications (id) {
        /// Application identifier.
        id -> Uuid,
        /// Chore reference.
        chore_id -> Uuid,
        /// Applicant reference.
        applicant_id -> Uuid,
        /// Optional free-text message.
        message -> Nullable<Text>,
        /// Review status.
        #[max_length = 50]
        status -> Varchar,
        /// Application timestamp.
        applied_at -> Timestamptz,
    }
}
