//! Port for car record persistence.
//!
//! The [`CarRepository`] trait is the storage engine as the domain sees it:
//! insert, list, replace and delete, each a single atomic step. Adapters
//! decide how records are laid out; the domain only relies on identifiers
//! being unique and on replace/delete reporting whether a record matched.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Car, CarDetails, CarId};

/// Errors raised by car repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarRepositoryError {
    /// Repository connection could not be established.
    #[error("car repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("car repository query failed: {message}")]
    Query { message: String },
    /// A stored document no longer satisfies the record constraints.
    #[error("stored car {id} could not be decoded: {message}")]
    Decode { id: String, message: String },
}

impl CarRepositoryError {
    /// Construct a connection failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a query failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Construct a decode failure for the stored record `id`.
    pub fn decode(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Port for car storage and retrieval.
///
/// No operation spans more than one record and there is no optimistic
/// concurrency: concurrent replaces of the same record resolve as last write
/// wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Persist a new record. The identifier is already assigned.
    async fn insert(&self, car: &Car) -> Result<(), CarRepositoryError>;

    /// Return every stored record in storage order.
    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError>;

    /// Replace all fields of the record with `id`.
    ///
    /// Returns the post-update record, or `None` when no record matched.
    async fn replace(
        &self,
        id: &CarId,
        details: &CarDetails,
    ) -> Result<Option<Car>, CarRepositoryError>;

    /// Remove the record with `id`, returning whether one was removed.
    async fn delete(&self, id: &CarId) -> Result<bool, CarRepositoryError>;
}

/// Process-local repository keeping records in insertion order.
///
/// Backs HTTP scenario tests and local experiments where no database is
/// available. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    cars: Mutex<Vec<Car>>,
}

impl InMemoryCarRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Car>>, CarRepositoryError> {
        self.cars
            .lock()
            .map_err(|_| CarRepositoryError::query("in-memory car store is poisoned"))
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn insert(&self, car: &Car) -> Result<(), CarRepositoryError> {
        let mut cars = self.lock()?;
        if cars.iter().any(|existing| existing.id() == car.id()) {
            return Err(CarRepositoryError::query(format!(
                "duplicate car id {}",
                car.id()
            )));
        }
        cars.push(car.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn replace(
        &self,
        id: &CarId,
        details: &CarDetails,
    ) -> Result<Option<Car>, CarRepositoryError> {
        let mut cars = self.lock()?;
        let Some(slot) = cars.iter_mut().find(|car| car.id() == id) else {
            return Ok(None);
        };
        let updated = slot.clone().replaced_with(details.clone());
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CarRepositoryError> {
        let mut cars = self.lock()?;
        let before = cars.len();
        cars.retain(|car| car.id() != id);
        Ok(cars.len() != before)
    }
}
