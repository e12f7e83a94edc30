//! Translation of domain errors into HTTP responses.
//!
//! The status follows the error code alone. Storage failures keep their
//! message so clients can report what broke; internal failures are replaced
//! by a generic message before the body is written. Every server-side
//! failure is logged with its original message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of internal failure details.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The error as it may be shown to a client.
fn client_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    match error.trace_id() {
        Some(id) => Error::internal(INTERNAL_ERROR_MESSAGE).with_trace_id(id.to_owned()),
        None => Error::internal(INTERNAL_ERROR_MESSAGE),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                code = ?self.code(),
                trace_id = self.trace_id(),
                message = self.message(),
                "car request failed"
            );
        }

        let body = client_view(self);
        let mut response = HttpResponse::build(status);
        if let Some(id) = body.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(body)
    }
}

#[cfg(test)]
mod tests;
