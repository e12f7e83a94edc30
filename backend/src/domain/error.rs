//! Failure payload returned by car inventory use-cases.
//!
//! [`Error`] is what every port hands back to an adapter. It carries a
//! coarse [`ErrorCode`], a message that is safe to show to API clients,
//! optional structured details and the trace identifier of the request that
//! produced it. Mapping codes onto transport statuses is the adapter's job.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::TraceId;

/// Failure class of an [`Error`], serialised in `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Missing fields, out-of-range values or an undecodable body.
    InvalidRequest,
    /// No car matched, or the inventory is empty.
    NotFound,
    /// The storage engine rejected or could not run the operation.
    StorageError,
    /// Anything else; adapters never expose its message.
    InternalError,
}

impl ErrorCode {
    /// Message used when an error is built with a blank one.
    const fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Not found",
            Self::StorageError => "Storage error",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Error envelope shared by the domain and its adapters.
///
/// Serialises as `{"code", "message", "traceId"?, "details"?}`; absent
/// optionals are omitted. The trace identifier in scope when the error is
/// built is captured automatically.
///
/// # Examples
/// ```
/// use car_inventory::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::invalid_request("All fields are required.")
///     .with_details(json!({ "fields": ["price"] }));
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.details(), Some(&json!({ "fields": ["price"] })));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Build an error with `code`, tagging it with the current trace id.
    ///
    /// A blank `message` is replaced by a generic one for the code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = code.fallback_message().to_owned();
        }
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// [`ErrorCode::InvalidRequest`] with `message`.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// [`ErrorCode::NotFound`] with `message`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// [`ErrorCode::StorageError`] with `message`.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// [`ErrorCode::InternalError`] with `message`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Replace the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details, such as the offending field names.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Failure class.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace identifier of the originating request.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured details, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
