//! Registration domain service.
//!
//! Implements the [`RegistrationCommand`] driving port over the driver and
//! passenger repository ports. Uniqueness is delegated to the storage layer:
//! the service inserts and translates key conflicts into domain errors rather
//! than running a racy check-then-insert sequence.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::ports::{
    DriverRegistrationRequest, DriverRegistrationResponse, DriverRepository,
    DriverRepositoryError, PassengerRegistrationRequest, PassengerRegistrationResponse,
    PassengerRepository, PassengerRepositoryError, RegistrationCommand,
};
use crate::domain::{DriverDraft, DriverRecord, Error, PassengerDraft, PassengerRecord};

/// Number of driver registrations that qualify for the early-bird bonus.
pub const EARLY_BIRD_LIMIT: i64 = 500;

/// Confirmation message returned to newly registered drivers.
pub const DRIVER_SUCCESS_MESSAGE: &str = "Registration successful! Welcome to cabcaro.com.";

/// Confirmation message returned to newly registered passengers.
pub const PASSENGER_SUCCESS_MESSAGE: &str =
    "Registration successful! We will notify you when services start in your area.";

/// Rejection message when a driver's mobile or licence number is taken.
pub const DRIVER_DUPLICATE_MESSAGE: &str =
    "Driver with this mobile or license already registered.";

/// Rejection message when a passenger's mobile number is taken.
pub const PASSENGER_DUPLICATE_MESSAGE: &str =
    "Passenger with this mobile number already registered.";

fn map_driver_repository_error(error: DriverRepositoryError) -> Error {
    match error {
        DriverRepositoryError::DuplicateKey => Error::duplicate_record(DRIVER_DUPLICATE_MESSAGE),
        DriverRepositoryError::Connection { message } => {
            Error::internal(format!("driver repository unavailable: {message}"))
        }
        DriverRepositoryError::Query { message } => {
            Error::internal(format!("driver repository error: {message}"))
        }
    }
}

fn map_passenger_repository_error(error: PassengerRepositoryError) -> Error {
    match error {
        PassengerRepositoryError::DuplicateKey => {
            Error::duplicate_record(PASSENGER_DUPLICATE_MESSAGE)
        }
        PassengerRepositoryError::Connection { message } => {
            Error::internal(format!("passenger repository unavailable: {message}"))
        }
        PassengerRepositoryError::Query { message } => {
            Error::internal(format!("passenger repository error: {message}"))
        }
    }
}

/// Registration service implementing the [`RegistrationCommand`] port.
#[derive(Clone)]
pub struct RegistrationService<D, P> {
    drivers: Arc<D>,
    passengers: Arc<P>,
}

impl<D, P> RegistrationService<D, P> {
    /// Create a new service over the driver and passenger repositories.
    ///
    /// The store handles are opened once at process start and passed in
    /// explicitly; the service holds no ambient connection state.
    pub fn new(drivers: Arc<D>, passengers: Arc<P>) -> Self {
        Self {
            drivers,
            passengers,
        }
    }
}

#[async_trait]
impl<D, P> RegistrationCommand for RegistrationService<D, P>
where
    D: DriverRepository,
    P: PassengerRepository,
{
    async fn register_driver(
        &self,
        request: DriverRegistrationRequest,
    ) -> Result<DriverRegistrationResponse, Error> {
        let record = DriverRecord::from_draft(
            DriverDraft {
                full_name: request.full_name,
                mobile_number: request.mobile_number,
                license_number: request.license_number,
                city: request.city,
            },
            Utc::now(),
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        if let Err(error) = self.drivers.insert(&record).await {
            if matches!(error, DriverRepositoryError::DuplicateKey) {
                warn!(city = %record.city(), "duplicate driver registration rejected");
            }
            return Err(map_driver_repository_error(error));
        }

        // Post-insert count, inclusive of the new record. Best-effort under
        // concurrency: boundary ties around the limit are acceptable.
        let count = self
            .drivers
            .count()
            .await
            .map_err(map_driver_repository_error)?;
        let is_early_bird = count <= EARLY_BIRD_LIMIT;

        info!(
            city = %record.city(),
            driver_count = count,
            is_early_bird,
            "driver registered"
        );

        Ok(DriverRegistrationResponse {
            message: DRIVER_SUCCESS_MESSAGE.to_owned(),
            is_early_bird,
        })
    }

    async fn register_passenger(
        &self,
        request: PassengerRegistrationRequest,
    ) -> Result<PassengerRegistrationResponse, Error> {
        let record = PassengerRecord::from_draft(
            PassengerDraft {
                full_name: request.full_name,
                mobile_number: request.mobile_number,
                city: request.city,
            },
            Utc::now(),
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        if let Err(error) = self.passengers.insert(&record).await {
            if matches!(error, PassengerRepositoryError::DuplicateKey) {
                warn!(city = %record.city(), "duplicate passenger registration rejected");
            }
            return Err(map_passenger_repository_error(error));
        }

        info!(city = %record.city(), "passenger registered");

        Ok(PassengerRegistrationResponse {
            message: PASSENGER_SUCCESS_MESSAGE.to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
