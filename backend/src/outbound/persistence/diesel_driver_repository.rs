//! PostgreSQL-backed `DriverRepository` implementation using Diesel ORM.
//!
//! Deduplication happens in the database: inserts run without a prior
//! existence check and unique-index violations on `mobile_number` or
//! `license_number` are translated into the port's `DuplicateKey` error.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{DriverRepository, DriverRepositoryError};
use crate::domain::DriverRecord;

use super::models::NewDriverRow;
use super::pool::{DbPool, PoolError};
use super::schema::drivers;

/// Diesel-backed implementation of the `DriverRepository` port.
#[derive(Clone)]
pub struct DieselDriverRepository {
    pool: DbPool,
}

impl DieselDriverRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain driver repository errors.
fn map_pool_error(error: PoolError) -> DriverRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DriverRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain driver repository errors.
///
/// `UniqueViolation` becomes `DuplicateKey` so the service layer can reject
/// the registration as a duplicate instead of a server error.
fn map_diesel_error(error: diesel::result::Error) -> DriverRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DriverRepositoryError::duplicate_key()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DriverRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => DriverRepositoryError::query("database query error"),
        _ => DriverRepositoryError::query("database error"),
    }
}

#[async_trait]
impl DriverRepository for DieselDriverRepository {
    async fn insert(&self, driver: &DriverRecord) -> Result<(), DriverRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewDriverRow {
            id: Uuid::new_v4(),
            full_name: driver.full_name().as_ref(),
            mobile_number: driver.mobile_number().as_ref(),
            license_number: driver.license_number().as_ref(),
            city: driver.city().as_ref(),
            registered_at: driver.registered_at(),
        };

        diesel::insert_into(drivers::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn count(&self) -> Result<i64, DriverRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        drivers::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(repo_err, DriverRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_key() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );
        let repo_err = map_diesel_error(diesel_err);

        assert_eq!(repo_err, DriverRepositoryError::DuplicateKey);
    }

    #[rstest]
    fn other_database_errors_map_to_query_error() {
        let diesel_err = diesel::result::Error::NotFound;
        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(repo_err, DriverRepositoryError::Query { .. }));
    }
}
