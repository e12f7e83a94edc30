//! Driving port for reading the inventory.

use async_trait::async_trait;

use crate::domain::{Car, Error};

/// Domain use-case port for listing cars.
#[async_trait]
pub trait CarsQuery: Send + Sync {
    /// Return every stored car.
    ///
    /// An empty inventory is reported as [`crate::domain::ErrorCode::NotFound`]
    /// rather than an empty list.
    async fn list_cars(&self) -> Result<Vec<Car>, Error>;
}
