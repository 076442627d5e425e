//! OpenAPI schema definitions for wire envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for the failure envelope shared by all endpoints.
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false` on the failure path.
    #[schema(example = false)]
    success: bool,
    /// Human-readable message returned to clients.
    #[schema(example = "Driver with this mobile or license already registered.")]
    message: String,
}
