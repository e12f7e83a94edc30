//! Car inventory service library.
//!
//! Layout follows a hexagonal split: [`domain`] holds the car record,
//! validation and use-cases; [`inbound`] adapts HTTP requests onto domain
//! ports; [`outbound`] implements storage ports against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
