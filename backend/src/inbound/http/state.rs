//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::CarInventoryService;
use crate::domain::ports::{CarRepository, CarsCommand, CarsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub cars: Arc<dyn CarsCommand>,
    pub cars_query: Arc<dyn CarsQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(cars: Arc<dyn CarsCommand>, cars_query: Arc<dyn CarsQuery>) -> Self {
        Self { cars, cars_query }
    }

    /// Wire both ports to a single [`CarInventoryService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use car_inventory::domain::ports::InMemoryCarRepository;
    /// use car_inventory::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryCarRepository::new()));
    /// # let _ = state;
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: CarRepository + 'static,
    {
        let service = Arc::new(CarInventoryService::new(repository));
        Self::new(service.clone(), service)
    }
}
