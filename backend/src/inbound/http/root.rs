//! Root informational endpoint.

use actix_web::{HttpResponse, get};

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Car Management API!";

/// Confirm the API is reachable.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    )
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}
