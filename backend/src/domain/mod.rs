//! Domain primitives, services and ports.
//!
//! Purpose: Define the car inventory entities and the use-cases that operate
//! on them, independent of HTTP and storage concerns. Keep types immutable
//! and document invariants and serialisation contracts in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Car, CarId, CarDetails, CarDraft: the inventory record and its parts.
//! - CarInventoryService: implements the `CarsCommand` and `CarsQuery` ports.
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - TraceId: request-scoped correlation identifier.

pub mod car;
pub mod car_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::car::{
    Car, CarDetails, CarDraft, CarId, CarValidationError, MIN_MODEL_YEAR, MISSING_FIELDS_MESSAGE,
};
pub use self::car_service::CarInventoryService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
