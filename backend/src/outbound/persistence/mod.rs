//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`DieselCarRepository`] implementation of the domain
//! `CarRepository` port, backed by PostgreSQL via `diesel-async` and `bb8`
//! connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and domain types. Validation stays in the domain.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Strongly typed errors**: database failures are mapped to
//!   `CarRepositoryError` variants with sanitised messages.
//!
//! # Example
//!
//! ```no_run
//! use car_inventory::outbound::persistence::{DbPool, DieselCarRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cars")).await?;
//! let repo = DieselCarRepository::new(pool);
//! repo.ensure_schema().await?;
//! # Ok(())
//! # }
//! ```

mod diesel_car_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_car_repository::DieselCarRepository;
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
