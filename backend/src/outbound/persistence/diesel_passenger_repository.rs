//! PostgreSQL-backed `PassengerRepository` implementation using Diesel ORM.
//!
//! As with drivers, the unique index on `mobile_number` is the authority for
//! deduplication; violations surface as the port's `DuplicateKey` error.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{PassengerRepository, PassengerRepositoryError};
use crate::domain::PassengerRecord;

use super::models::NewPassengerRow;
use super::pool::{DbPool, PoolError};
use super::schema::passengers;

/// Diesel-backed implementation of the `PassengerRepository` port.
#[derive(Clone)]
pub struct DieselPassengerRepository {
    pool: DbPool,
}

impl DieselPassengerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain passenger repository errors.
fn map_pool_error(error: PoolError) -> PassengerRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PassengerRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain passenger repository errors.
fn map_diesel_error(error: diesel::result::Error) -> PassengerRepositoryError {
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
            PassengerRepositoryError::duplicate_key()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PassengerRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            PassengerRepositoryError::query("database query error")
        }
        _ => PassengerRepositoryError::query("database error"),
    }
}

#[async_trait]
impl PassengerRepository for DieselPassengerRepository {
    async fn insert(&self, passenger: &PassengerRecord) -> Result<(), PassengerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPassengerRow {
            id: Uuid::new_v4(),
            full_name: passenger.full_name().as_ref(),
            mobile_number: passenger.mobile_number().as_ref(),
            city: passenger.city().as_ref(),
            created_at: passenger.created_at(),
        };

        diesel::insert_into(passengers::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unique_violation_maps_to_duplicate_key() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );
        let repo_err = map_diesel_error(diesel_err);

        assert_eq!(repo_err, PassengerRepositoryError::DuplicateKey);
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_owned()),
        );
        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(
            repo_err,
            PassengerRepositoryError::Connection { .. }
        ));
    }
}
