//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the car and health endpoints from the inbound layer
//! together with the error envelope schemas. Swagger UI serves it at
//! `/api-docs/` and `cargo run --bin openapi-dump` exports it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::cars::{CarRequest, CarResponse, DeleteCarResponse};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorDetailsSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Management API",
        description = "Create, list, replace and delete cars in a shared inventory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cars::create_car,
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::update_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::root::welcome,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CarRequest,
        CarResponse,
        DeleteCarResponse,
        HealthStatus,
        ErrorSchema,
        ErrorCodeSchema,
        ErrorDetailsSchema
    )),
    tags(
        (name = "cars", description = "Car inventory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI document structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_car_schema_lists_record_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let car_schema = schemas.get("CarResponse").expect("CarResponse schema");

        for field in ["id", "make", "model", "year", "color", "price"] {
            assert_object_schema_has_field(car_schema, field);
        }
    }

    #[test]
    fn openapi_registers_car_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        let collection = paths.get("/api/cars").expect("/api/cars path");
        assert!(collection.post.is_some());
        assert!(collection.get.is_some());

        let item = paths.get("/api/cars/{id}").expect("/api/cars/{id} path");
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
