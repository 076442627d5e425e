//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::warn;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use cabcaro_backend::ApiDoc;
use cabcaro_backend::domain::ports::{
    FixtureDriverRepository, FixturePassengerRepository, RegistrationCommand,
};
use cabcaro_backend::domain::RegistrationService;
use cabcaro_backend::inbound::http::health::{live, ready, HealthState};
use cabcaro_backend::inbound::http::registrations::{register_driver, register_passenger};
use cabcaro_backend::inbound::http::state::HttpState;
use cabcaro_backend::outbound::persistence::{DieselDriverRepository, DieselPassengerRepository};
use cabcaro_backend::Trace;

/// Build the registration service based on configuration.
///
/// Uses the Diesel-backed repositories when a pool is available; otherwise
/// falls back to the in-memory fixtures so the server can run without a
/// database during local development and in handler tests.
fn build_registration_service(config: &ServerConfig) -> Arc<dyn RegistrationCommand> {
    match &config.db_pool {
        Some(pool) => Arc::new(RegistrationService::new(
            Arc::new(DieselDriverRepository::new(pool.clone())),
            Arc::new(DieselPassengerRepository::new(pool.clone())),
        )),
        None => {
            warn!("no database configured; registrations are held in memory (dev only)");
            Arc::new(RegistrationService::new(
                Arc::new(FixtureDriverRepository::new()),
                Arc::new(FixturePassengerRepository::new()),
            ))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(register_driver)
        .service(register_passenger);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let registrations = build_registration_service(&config);
    let http_state = web::Data::new(HttpState::new(registrations));

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
