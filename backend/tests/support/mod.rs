//! Shared helpers for car inventory integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the application is assembled here from the library's route table, backed
//! by the in-memory repository.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, test, web};

use car_inventory::Trace;
use car_inventory::domain::ports::InMemoryCarRepository;
use car_inventory::inbound::http::health::HealthState;
use car_inventory::inbound::http::routes;
use car_inventory::inbound::http::state::HttpState;
use serde_json::{Value, json};

/// Build the full HTTP surface over an empty in-memory inventory.
pub async fn init_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let http_state = HttpState::from_repository(Arc::new(InMemoryCarRepository::new()));
    let health_state = HealthState::new();
    health_state.mark_ready();

    test::init_service(
        App::new()
            .app_data(web::Data::new(health_state))
            .app_data(web::Data::new(http_state))
            .configure(routes::configure)
            .wrap(Trace)
            .wrap(NormalizePath::trim()),
    )
    .await
}

/// A complete, valid car payload.
pub fn car_payload(make: &str, model: &str, year: i32, color: &str, price: f64) -> Value {
    json!({
        "make": make,
        "model": model,
        "year": year,
        "color": color,
        "price": price
    })
}
