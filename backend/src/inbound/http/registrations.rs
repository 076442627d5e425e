//! Registration HTTP handlers.
//!
//! ```text
//! POST /api/register
//! POST /api/register-passenger
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{DriverRegistrationRequest, PassengerRegistrationRequest};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;

/// Request payload for driver registration.
///
/// Every field deserialises as optional: presence and format are enforced by
/// the service layer so a missing field yields the same clean 400 as a
/// malformed one.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDriverBody {
    /// Registrant's full name.
    pub full_name: Option<String>,
    /// Ten-digit mobile number; unique key.
    pub mobile_number: Option<String>,
    /// Driving licence number; unique key, stored uppercase.
    pub license_number: Option<String>,
    /// Optional city; blank values default to Delhi NCR.
    pub city: Option<String>,
}

/// Response payload for a successful driver registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDriverResponseBody {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable confirmation message.
    pub message: String,
    /// Whether this registrant is among the first 500 drivers.
    pub is_early_bird: bool,
}

/// Request payload for passenger registration.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPassengerBody {
    /// Registrant's full name.
    pub full_name: Option<String>,
    /// Ten-digit mobile number; unique key.
    pub mobile_number: Option<String>,
    /// City the passenger wants rides in; required.
    pub city: Option<String>,
}

/// Response payload for a successful passenger registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPassengerResponseBody {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable confirmation message.
    pub message: String,
}

/// Register a driver lead.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterDriverBody,
    responses(
        (status = 201, description = "Driver registered", body = RegisterDriverResponseBody),
        (status = 400, description = "Validation failure or duplicate registration", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "registerDriver"
)]
#[post("/register")]
pub async fn register_driver(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterDriverBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let response = state
        .registrations
        .register_driver(DriverRegistrationRequest {
            full_name: body.full_name.unwrap_or_default(),
            mobile_number: body.mobile_number.unwrap_or_default(),
            license_number: body.license_number.unwrap_or_default(),
            city: body.city,
        })
        .await?;

    Ok(HttpResponse::Created().json(RegisterDriverResponseBody {
        success: true,
        message: response.message,
        is_early_bird: response.is_early_bird,
    }))
}

/// Register a passenger lead.
#[utoipa::path(
    post,
    path = "/api/register-passenger",
    request_body = RegisterPassengerBody,
    responses(
        (status = 201, description = "Passenger registered", body = RegisterPassengerResponseBody),
        (status = 400, description = "Validation failure or duplicate registration", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "registerPassenger"
)]
#[post("/register-passenger")]
pub async fn register_passenger(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterPassengerBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let response = state
        .registrations
        .register_passenger(PassengerRegistrationRequest {
            full_name: body.full_name.unwrap_or_default(),
            mobile_number: body.mobile_number.unwrap_or_default(),
            city: body.city.unwrap_or_default(),
        })
        .await?;

    Ok(HttpResponse::Created().json(RegisterPassengerResponseBody {
        success: true,
        message: response.message,
    }))
}

#[cfg(test)]
#[path = "registrations_tests.rs"]
mod tests;
