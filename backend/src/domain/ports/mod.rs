//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`CarsCommand`], [`CarsQuery`]) are what inbound adapters
//! call. Driven ports ([`CarRepository`]) are what the domain calls; each
//! exposes a strongly typed error so adapters map their failures into
//! predictable variants.

mod car_repository;
mod cars_command;
mod cars_query;

#[cfg(test)]
pub use car_repository::MockCarRepository;
pub use car_repository::{CarRepository, CarRepositoryError, InMemoryCarRepository};
pub use cars_command::CarsCommand;
pub use cars_query::CarsQuery;
