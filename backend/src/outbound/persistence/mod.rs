//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! The adapters stay thin: they translate between Diesel rows and domain
//! records and map database errors to port errors. Uniqueness is enforced by
//! the unique indexes created in `migrations/`, never re-checked in
//! application code.

mod diesel_driver_repository;
mod diesel_passenger_repository;
mod models;
mod pool;
mod schema;

pub use diesel_driver_repository::DieselDriverRepository;
pub use diesel_passenger_repository::DieselPassengerRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
