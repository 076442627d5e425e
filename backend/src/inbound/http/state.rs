//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend on
//! the registration driving port only and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::RegistrationCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration use-case consumed by the two POST routes.
    pub registrations: Arc<dyn RegistrationCommand>,
}

impl HttpState {
    /// Construct state from a registration port implementation.
    pub fn new(registrations: Arc<dyn RegistrationCommand>) -> Self {
        Self { registrations }
    }
}
