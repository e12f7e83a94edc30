//! Shared validation helpers for inbound HTTP adapters.
//!
//! Body extraction failures (malformed JSON, wrong field types, wrong
//! content type) surface as the standard error envelope instead of Actix's
//! plain-text defaults.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Message reported when a request body cannot be decoded.
pub const INVALID_JSON_MESSAGE: &str = "Request body must be a valid JSON object";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCode {
    InvalidJson,
    UnsupportedContentType,
    PayloadTooLarge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::UnsupportedContentType => "unsupported_content_type",
            ErrorCode::PayloadTooLarge => "payload_too_large",
        }
    }
}

fn classify(err: &JsonPayloadError) -> ErrorCode {
    match err {
        JsonPayloadError::ContentType => ErrorCode::UnsupportedContentType,
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            ErrorCode::PayloadTooLarge
        }
        _ => ErrorCode::InvalidJson,
    }
}

pub(crate) fn invalid_json_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request(INVALID_JSON_MESSAGE).with_details(json!({
        "code": classify(err).as_str(),
        "reason": err.to_string(),
    }))
}

/// Map JSON extractor failures onto the domain error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_json_error(&err).into()
}

/// JSON extractor configuration shared by every JSON endpoint.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use car_inventory::inbound::http::validation::json_config;
///
/// let app = App::new().app_data(json_config());
/// # let _ = app;
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
