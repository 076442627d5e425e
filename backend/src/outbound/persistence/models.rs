//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{drivers, passengers};

/// Insertable struct for creating new driver records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = drivers)]
pub(crate) struct NewDriverRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub mobile_number: &'a str,
    pub license_number: &'a str,
    pub city: &'a str,
    pub registered_at: DateTime<Utc>,
}

/// Insertable struct for creating new passenger records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = passengers)]
pub(crate) struct NewPassengerRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub mobile_number: &'a str,
    pub city: &'a str,
    pub created_at: DateTime<Utc>,
}
