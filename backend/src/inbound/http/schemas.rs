//! OpenAPI descriptions of the error envelope.
//!
//! [`crate::domain::Error`] stays free of utoipa derives, so its wire shape
//! is described here instead and registered under the domain type's name.
//! These types are never built at runtime.

use serde::Serialize;
use utoipa::ToSchema;

/// Documented form of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Missing fields, out-of-range values or an undecodable body.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No car has the given identifier, or the inventory is empty.
    #[schema(rename = "not_found")]
    NotFound,
    /// The car store rejected or could not run the operation.
    #[schema(rename = "storage_error")]
    StorageError,
    /// Unexpected failure; the message is always generic.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Shapes of the optional `details` object.
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetailsSchema {
    /// Required fields that were absent, null or blank.
    MissingFields {
        #[schema(example = json!(["price"]))]
        fields: Vec<String>,
    },
    /// Single field whose value is out of range.
    InvalidField {
        #[schema(example = "year")]
        field: String,
    },
    /// Request body that could not be decoded.
    InvalidBody {
        #[schema(example = "invalid_json")]
        code: String,
        #[schema(example = "Json deserialize error: EOF while parsing an object")]
        reason: String,
    },
}

/// Documented form of [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
pub struct ErrorSchema {
    /// Machine-readable failure class.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Message safe to show to API clients.
    #[schema(example = "All fields are required.")]
    message: String,
    /// Matches the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Extra context, such as the offending fields.
    details: Option<ErrorDetailsSchema>,
}
