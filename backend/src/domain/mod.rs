//! Domain primitives and services.
//!
//! Purpose: define the registration records, their validation invariants, and
//! the registration service that enforces the workflow. Types here are
//! transport and storage agnostic; inbound and outbound adapters translate at
//! the boundary.

pub mod error;
pub mod ports;

mod driver;
mod passenger;
mod registration;

pub use self::driver::{
    City, DriverDraft, DriverRecord, FullName, LicenseNumber, MobileNumber,
    RegistrationValidationError, DEFAULT_DRIVER_CITY,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::passenger::{PassengerDraft, PassengerRecord};
pub use self::registration::{
    RegistrationService, DRIVER_DUPLICATE_MESSAGE, DRIVER_SUCCESS_MESSAGE, EARLY_BIRD_LIMIT,
    PASSENGER_DUPLICATE_MESSAGE, PASSENGER_SUCCESS_MESSAGE,
};
