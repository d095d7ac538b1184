//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/*/up.sql` exactly. Regenerate
//! with `diesel print-schema` when the migration changes.

diesel::table! {
    /// People whose costs are tracked.
    users (id) {
        /// Externally supplied identity key.
        id -> Text,
        first_name -> Text,
        last_name -> Text,
        birthday -> Nullable<Date>,
        marital_status -> Nullable<Text>,
    }
}

diesel::table! {
    /// Individual cost entries.
    ///
    /// `id` is a `BIGSERIAL`, so ascending ids follow insertion order.
    costs (id) {
        id -> Int8,
        /// References `users.id`.
        user_id -> Text,
        description -> Text,
        /// Lower-case category name.
        category -> Text,
        amount -> Float8,
        /// Defaults to `now()` when omitted on insert.
        date -> Timestamptz,
    }
}

diesel::joinable!(costs -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(costs, users);
