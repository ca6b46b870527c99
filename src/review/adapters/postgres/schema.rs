//! Diesel schema for review tables.

diesel::table! {
    /// Reviews between chore participants. Unique per (chore, reviewer).
    reviews (id) {
        /// Review identifier.
        id -> Uuid,
        /// Chore the review is about.
        chore_id -> Uuid,
        /// User who wrote the review.
        reviewer_id -> Uuid,
        /// User the review is about.
        reviewee_id -> Uuid,
        /// Rating on the 1 to 5 scale.
        rating -> Int4,
        /// Free-text comment, if any.
        comment -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
