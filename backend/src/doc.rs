//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the two registration endpoints, the health probes, and
//! their request/response schemas. The generated specification is served by
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::registrations::{
    RegisterDriverBody, RegisterDriverResponseBody, RegisterPassengerBody,
    RegisterPassengerResponseBody,
};
use crate::inbound::http::schemas::ErrorSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cabcaro registration API",
        description = "Lead-capture endpoints for driver and passenger registrations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registrations::register_driver,
        crate::inbound::http::registrations::register_passenger,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterDriverBody,
        RegisterDriverResponseBody,
        RegisterPassengerBody,
        RegisterPassengerResponseBody,
        ErrorSchema
    )),
    tags(
        (name = "registrations", description = "Driver and passenger lead capture"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
