//! Diesel schema for identity tables.

diesel::table! {
    /// Registered users.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 100]
        name -> Varchar,
        /// Normalized email address, unique.
        #[max_length = 120]
        email -> Varchar,
        /// PHC-formatted credential hash.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Phone number, if provided.
        #[max_length = 20]
        phone -> Nullable<Varchar>,
        /// Location, if provided.
        #[max_length = 200]
        location -> Nullable<Varchar>,
        /// Bio, if provided.
        bio -> Nullable<Text>,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
