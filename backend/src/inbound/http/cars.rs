//! Car inventory HTTP handlers.
//!
//! ```text
//! POST   /api/cars
//! GET    /api/cars
//! PUT    /api/cars/{id}
//! DELETE /api/cars/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Car, CarDraft, Error, ErrorCode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or replacing a car.
///
/// Every field is required; absent and `null` values are reported together
/// by the domain validation rather than by the JSON extractor. `year` must
/// be a JSON integer: `2020.0` fails to decode and is answered with a 400
/// whose `details.code` is `invalid_json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CarRequest {
    #[schema(example = "Toyota")]
    pub make: Option<String>,
    #[schema(example = "Corolla")]
    pub model: Option<String>,
    #[schema(minimum = 1886, example = 2020)]
    pub year: Option<i32>,
    #[schema(example = "Blue")]
    pub color: Option<String>,
    #[schema(minimum = 0, example = 20000)]
    pub price: Option<f64>,
}

impl From<CarRequest> for CarDraft {
    fn from(value: CarRequest) -> Self {
        let CarRequest {
            make,
            model,
            year,
            color,
            price,
        } = value;
        Self {
            make,
            model,
            year,
            color,
            price,
        }
    }
}

/// Car record as returned to clients.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct CarResponse {
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Toyota")]
    pub make: String,
    #[schema(example = "Corolla")]
    pub model: String,
    #[schema(example = 2020)]
    pub year: i32,
    #[schema(example = "Blue")]
    pub color: String,
    #[schema(example = 20000)]
    pub price: f64,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        let details = car.details();
        Self {
            id: car.id().to_string(),
            make: details.make().to_owned(),
            model: details.model().to_owned(),
            year: details.year(),
            color: details.color().to_owned(),
            price: details.price(),
        }
    }
}

/// Confirmation returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteCarResponse {
    #[schema(example = "Car with ID 3fa85f64-5717-4562-b3fc-2c963f66afa6 deleted successfully")]
    pub message: String,
}

/// Storage failures while listing are reported as bad requests; every other
/// failure keeps its status.
fn list_failure(error: Error) -> Error {
    if error.code() != ErrorCode::StorageError {
        return error;
    }
    let mut remapped = Error::invalid_request(error.message());
    if let Some(id) = error.trace_id() {
        remapped = remapped.with_trace_id(id.to_owned());
    }
    if let Some(details) = error.details() {
        remapped = remapped.with_details(details.clone());
    }
    remapped
}

/// Create a car record with a freshly assigned identifier.
#[utoipa::path(
    post,
    path = "/api/cars",
    request_body = CarRequest,
    responses(
        (status = 201, description = "Car created", body = CarResponse),
        (status = 400, description = "Missing fields, out-of-range values or malformed JSON", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "createCar"
)]
#[post("/cars")]
pub async fn create_car(
    state: web::Data<HttpState>,
    payload: web::Json<CarRequest>,
) -> ApiResult<HttpResponse> {
    let car = state.cars.create_car(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(CarResponse::from(car)))
}

/// List every car in the inventory.
#[utoipa::path(
    get,
    path = "/api/cars",
    responses(
        (status = 200, description = "Cars in storage order", body = [CarResponse]),
        (status = 400, description = "Storage failure", body = ErrorSchema),
        (status = 404, description = "No cars found", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "listCars"
)]
#[get("/cars")]
pub async fn list_cars(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CarResponse>>> {
    let cars = state.cars_query.list_cars().await.map_err(list_failure)?;
    Ok(web::Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Replace every field of an existing car.
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    params(("id" = uuid::Uuid, Path, description = "Car identifier")),
    request_body = CarRequest,
    responses(
        (status = 200, description = "Car updated", body = CarResponse),
        (status = 400, description = "Missing fields, out-of-range values or malformed JSON", body = ErrorSchema),
        (status = 404, description = "Car not found", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "updateCar"
)]
#[put("/cars/{id}")]
pub async fn update_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CarRequest>,
) -> ApiResult<web::Json<CarResponse>> {
    let id = path.into_inner();
    let car = state
        .cars
        .update_car(&id, payload.into_inner().into())
        .await?;
    Ok(web::Json(CarResponse::from(car)))
}

/// Permanently remove a car.
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    params(("id" = uuid::Uuid, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car deleted", body = DeleteCarResponse),
        (status = 404, description = "Car not found", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "deleteCar"
)]
#[delete("/cars/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteCarResponse>> {
    let id = state.cars.delete_car(&path.into_inner()).await?;
    Ok(web::Json(DeleteCarResponse {
        message: format!("Car with ID {id} deleted successfully"),
    }))
}

#[cfg(test)]
#[path = "cars_tests.rs"]
mod tests;
