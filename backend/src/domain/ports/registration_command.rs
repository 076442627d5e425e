//! Driving port for registration mutations.
//!
//! The HTTP adapter depends on this port only, so handlers stay testable
//! against mocks and fixtures without touching a database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Error;

/// Raw driver registration input as received from an inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRegistrationRequest {
    /// Registrant's full name.
    pub full_name: String,
    /// Ten-digit mobile number.
    pub mobile_number: String,
    /// Driving licence number.
    pub license_number: String,
    /// Optional city; blank or absent values fall back to the default.
    pub city: Option<String>,
}

/// Result of a successful driver registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRegistrationResponse {
    /// Human-readable confirmation message.
    pub message: String,
    /// Whether this registrant is among the first 500 drivers.
    pub is_early_bird: bool,
}

/// Raw passenger registration input as received from an inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRegistrationRequest {
    /// Registrant's full name.
    pub full_name: String,
    /// Ten-digit mobile number.
    pub mobile_number: String,
    /// City the passenger wants rides in; required.
    pub city: String,
}

/// Result of a successful passenger registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRegistrationResponse {
    /// Human-readable confirmation message.
    pub message: String,
}

/// Driving port for registration write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Validate and persist a driver registration, returning the confirmation
    /// message and early-bird flag.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidRequest`] on malformed
    /// input, [`crate::domain::ErrorCode::DuplicateRecord`] when the mobile
    /// or licence number is already registered, and
    /// [`crate::domain::ErrorCode::InternalError`] on storage failures.
    async fn register_driver(
        &self,
        request: DriverRegistrationRequest,
    ) -> Result<DriverRegistrationResponse, Error>;

    /// Validate and persist a passenger registration.
    ///
    /// Same failure taxonomy as [`RegistrationCommand::register_driver`],
    /// with the duplicate check keyed on the mobile number only.
    async fn register_passenger(
        &self,
        request: PassengerRegistrationRequest,
    ) -> Result<PassengerRegistrationResponse, Error>;
}
