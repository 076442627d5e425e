//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Driver registrations.
    ///
    /// `mobile_number` and `license_number` each carry a unique index; the
    /// application relies on those constraints for deduplication.
    drivers (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Registrant's full name, trimmed.
        full_name -> Varchar,
        /// Ten-digit mobile number; unique.
        mobile_number -> Varchar,
        /// Uppercased licence number; unique.
        license_number -> Varchar,
        /// City, defaulted to Delhi NCR when the submission omitted it.
        city -> Varchar,
        /// Record creation timestamp.
        registered_at -> Timestamptz,
    }
}

diesel::table! {
    /// Passenger registrations.
    ///
    /// `mobile_number` carries a unique index; names and cities may repeat.
    passengers (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Registrant's full name, trimmed.
        full_name -> Varchar,
        /// Ten-digit mobile number; unique.
        mobile_number -> Varchar,
        /// City the passenger wants rides in.
        city -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
