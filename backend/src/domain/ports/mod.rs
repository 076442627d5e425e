//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod driver_repository;
mod passenger_repository;
mod registration_command;

pub use driver_repository::{DriverRepository, DriverRepositoryError, FixtureDriverRepository};
pub use passenger_repository::{
    FixturePassengerRepository, PassengerRepository, PassengerRepositoryError,
};
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::{
    DriverRegistrationRequest, DriverRegistrationResponse, PassengerRegistrationRequest,
    PassengerRegistrationResponse, RegistrationCommand,
};
