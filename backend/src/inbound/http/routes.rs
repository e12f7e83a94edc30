//! Route table for the HTTP surface.
//!
//! The server and the HTTP scenario tests register the same routes through
//! [`configure`]. Paths are matched without a trailing slash, so the app must
//! be wrapped in [`actix_web::middleware::NormalizePath::trim`].

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::inbound::http::cars::{create_car, delete_car, list_cars, update_car};
use crate::inbound::http::health::{health, live, ready};
use crate::inbound::http::root::welcome;
use crate::inbound::http::validation::json_config;

/// Base path of the Swagger UI.
pub const API_DOCS_PATH: &str = "/api-docs";

/// Location of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Swagger UI entry page; the bare docs path redirects here.
const API_DOCS_INDEX: &str = "/api-docs/index.html";

async fn api_docs_index() -> HttpResponse {
    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, API_DOCS_INDEX))
        .finish()
}

/// Register the car API, the informational endpoints and the API docs.
///
/// Handlers expect `web::Data<HttpState>` and `web::Data<HealthState>` to be
/// registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .service(create_car)
                .service(list_cars)
                .service(update_car)
                .service(delete_car),
        )
        .service(welcome)
        .service(health)
        .service(ready)
        .service(live)
        .route(API_DOCS_PATH, web::get().to(api_docs_index))
        .service(
            SwaggerUi::new(format!("{API_DOCS_PATH}/{{_:.*}}"))
                .url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
        );
}
