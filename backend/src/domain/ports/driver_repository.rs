//! Port abstraction for driver persistence adapters and their errors.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::DriverRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by driver repository adapters.
    pub enum DriverRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "driver repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "driver repository query failed: {message}",
        /// Insert collided with an existing mobile or licence number.
        DuplicateKey => "driver mobile or license number already registered",
    }
}

/// Driven port for the driver collection of the record store.
///
/// Adapters must enforce uniqueness of `mobile_number` and `license_number`
/// at the storage layer and surface collisions as
/// [`DriverRepositoryError::DuplicateKey`], so the service never needs an
/// application-level check-then-insert sequence.
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Insert a new driver record.
    async fn insert(&self, driver: &DriverRecord) -> Result<(), DriverRepositoryError>;

    /// Count all driver records, including any inserted concurrently.
    async fn count(&self) -> Result<i64, DriverRepositoryError>;
}

/// In-memory driver repository for tests and database-less development.
///
/// Enforces the same OR-uniqueness semantics as the SQL unique indexes: an
/// insert fails when either the mobile number or the licence number matches
/// an existing record.
#[derive(Debug, Default)]
pub struct FixtureDriverRepository {
    records: Mutex<Vec<DriverRecord>>,
}

impl FixtureDriverRepository {
    /// Create an empty fixture repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the stored records, for assertions in tests.
    pub fn records(&self) -> Vec<DriverRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl DriverRepository for FixtureDriverRepository {
    async fn insert(&self, driver: &DriverRecord) -> Result<(), DriverRepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| DriverRepositoryError::query("fixture lock poisoned"))?;

        let conflict = records.iter().any(|existing| {
            existing.mobile_number() == driver.mobile_number()
                || existing.license_number() == driver.license_number()
        });
        if conflict {
            return Err(DriverRepositoryError::duplicate_key());
        }

        records.push(driver.clone());
        Ok(())
    }

    async fn count(&self) -> Result<i64, DriverRepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|_| DriverRepositoryError::query("fixture lock poisoned"))?;
        i64::try_from(records.len())
            .map_err(|_| DriverRepositoryError::query("driver count overflowed i64"))
    }
}
