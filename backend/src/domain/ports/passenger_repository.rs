//! Port abstraction for passenger persistence adapters and their errors.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::PassengerRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by passenger repository adapters.
    pub enum PassengerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "passenger repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "passenger repository query failed: {message}",
        /// Insert collided with an existing mobile number.
        DuplicateKey => "passenger mobile number already registered",
    }
}

/// Driven port for the passenger collection of the record store.
///
/// Adapters must enforce uniqueness of `mobile_number` at the storage layer
/// and surface collisions as [`PassengerRepositoryError::DuplicateKey`].
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Insert a new passenger record.
    async fn insert(&self, passenger: &PassengerRecord) -> Result<(), PassengerRepositoryError>;
}

/// In-memory passenger repository for tests and database-less development.
///
/// The duplicate check considers the mobile number only; names and cities may
/// repeat freely, matching the SQL unique index.
#[derive(Debug, Default)]
pub struct FixturePassengerRepository {
    records: Mutex<Vec<PassengerRecord>>,
}

impl FixturePassengerRepository {
    /// Create an empty fixture repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the stored records, for assertions in tests.
    pub fn records(&self) -> Vec<PassengerRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl PassengerRepository for FixturePassengerRepository {
    async fn insert(&self, passenger: &PassengerRecord) -> Result<(), PassengerRepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| PassengerRepositoryError::query("fixture lock poisoned"))?;

        let conflict = records
            .iter()
            .any(|existing| existing.mobile_number() == passenger.mobile_number());
        if conflict {
            return Err(PassengerRepositoryError::duplicate_key());
        }

        records.push(passenger.clone());
        Ok(())
    }
}
