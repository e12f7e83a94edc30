//! Driving port for car mutations.
//!
//! Inbound adapters call this port to create, replace and delete records
//! without importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Car, CarDraft, CarId, Error};

/// Domain use-case port for changing the inventory.
#[async_trait]
pub trait CarsCommand: Send + Sync {
    /// Validate `draft`, assign a new identifier and persist the record.
    async fn create_car(&self, draft: CarDraft) -> Result<Car, Error>;

    /// Validate `draft` and replace every field of the record `id`.
    ///
    /// `id` is the identifier as supplied by the client; values that cannot
    /// name a record are reported as not found.
    async fn update_car(&self, id: &str, draft: CarDraft) -> Result<Car, Error>;

    /// Remove the record `id` and return its identifier.
    async fn delete_car(&self, id: &str) -> Result<CarId, Error>;
}
