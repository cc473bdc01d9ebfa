//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! when a migration changes the table.

diesel::table! {
    /// User records.
    users (id) {
        /// Primary key assigned from the `SERIAL` sequence.
        id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        birthday -> Date,
        created_at -> Timestamptz,
        /// Refreshed by every update issued through the repository.
        updated_at -> Timestamptz,
    }
}
