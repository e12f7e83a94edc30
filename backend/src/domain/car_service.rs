//! Car inventory domain service.
//!
//! Implements the [`CarsCommand`] and [`CarsQuery`] driving ports on top of a
//! [`CarRepository`]. Validation happens here, before any storage call, so a
//! rejected request never touches the repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{CarRepository, CarRepositoryError, CarsCommand, CarsQuery};
use crate::domain::{Car, CarDetails, CarDraft, CarId, CarValidationError, Error};

fn map_validation_error(error: CarValidationError) -> Error {
    let message = error.to_string();
    match error {
        CarValidationError::MissingFields { fields } => {
            Error::invalid_request(message).with_details(json!({ "fields": fields }))
        }
        other => match other.field() {
            Some(field) => Error::invalid_request(message).with_details(json!({ "field": field })),
            None => Error::invalid_request(message),
        },
    }
}

fn map_repository_error(error: CarRepositoryError) -> Error {
    warn!(error = %error, "car repository call failed");
    Error::storage(error.to_string())
}

fn car_not_found(id: &str) -> Error {
    Error::not_found(format!("Car with ID {id} not found"))
}

/// Car service implementing the inventory driving ports.
pub struct CarInventoryService<R> {
    repository: Arc<R>,
}

impl<R> Clone for CarInventoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> CarInventoryService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CarInventoryService<R>
where
    R: CarRepository,
{
    fn validate(draft: CarDraft) -> Result<CarDetails, Error> {
        CarDetails::from_draft(draft).map_err(map_validation_error)
    }

    /// Parse a client-supplied identifier. Values that are not identifiers
    /// cannot name a stored record, so they are reported as not found.
    fn parse_id(raw: &str) -> Result<CarId, Error> {
        CarId::new(raw).map_err(|_| car_not_found(raw))
    }
}

#[async_trait]
impl<R> CarsCommand for CarInventoryService<R>
where
    R: CarRepository,
{
    async fn create_car(&self, draft: CarDraft) -> Result<Car, Error> {
        let details = Self::validate(draft)?;
        let car = Car::new(CarId::random(), details);

        self.repository
            .insert(&car)
            .await
            .map_err(map_repository_error)?;

        debug!(car_id = %car.id(), "car created");
        Ok(car)
    }

    async fn update_car(&self, id: &str, draft: CarDraft) -> Result<Car, Error> {
        let details = Self::validate(draft)?;
        let car_id = Self::parse_id(id)?;

        let updated = self
            .repository
            .replace(&car_id, &details)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| car_not_found(id))?;

        debug!(car_id = %car_id, "car replaced");
        Ok(updated)
    }

    async fn delete_car(&self, id: &str) -> Result<CarId, Error> {
        let car_id = Self::parse_id(id)?;

        let removed = self
            .repository
            .delete(&car_id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(car_not_found(id));
        }

        debug!(car_id = %car_id, "car deleted");
        Ok(car_id)
    }
}

#[async_trait]
impl<R> CarsQuery for CarInventoryService<R>
where
    R: CarRepository,
{
    async fn list_cars(&self) -> Result<Vec<Car>, Error> {
        let cars = self
            .repository
            .list()
            .await
            .map_err(map_repository_error)?;
        if cars.is_empty() {
            return Err(Error::not_found("No cars found"));
        }

        debug!(count = cars.len(), "cars listed");
        Ok(cars)
    }
}

#[cfg(test)]
#[path = "car_service_tests.rs"]
mod tests;
