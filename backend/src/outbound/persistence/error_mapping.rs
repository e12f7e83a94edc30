//! Translation of pool and Diesel failures into repository errors.
//!
//! Messages name the failure category only. Driver text can carry
//! connection strings or SQL fragments and stays in the debug log.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::CarRepositoryError;

use super::pool::PoolError;

/// Map pool checkout or build failures to a connection error.
pub(crate) fn map_pool_error(error: PoolError) -> CarRepositoryError {
    debug!(error = %error, "car store pool failure");
    match error {
        PoolError::Checkout { .. } => {
            CarRepositoryError::connection("no database connection available")
        }
        PoolError::Build { .. } => CarRepositoryError::connection("database pool unavailable"),
    }
}

/// Map Diesel failures to query or connection errors.
pub(crate) fn map_diesel_error(error: DieselError) -> CarRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CarRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CarRepositoryError::query("car identifier already exists")
        }
        DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, _) => {
            CarRepositoryError::query("concurrent update conflict")
        }
        DieselError::DatabaseError(_, _) => CarRepositoryError::query("database error"),
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            CarRepositoryError::query("column conversion failed")
        }
        _ => CarRepositoryError::query("database query error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"), "car repository connection failed: no database connection available")]
    #[case(PoolError::build("bad url"), "car repository connection failed: database pool unavailable")]
    fn pool_errors_become_connection_errors(#[case] error: PoolError, #[case] expected: &str) {
        assert_eq!(map_pool_error(error).to_string(), expected);
    }

    #[rstest]
    fn missing_rows_become_query_errors() {
        let mapped = map_diesel_error(DieselError::NotFound);
        assert!(matches!(mapped, CarRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_messages_are_not_forwarded() {
        let mapped = map_pool_error(PoolError::build("postgres://user:secret@db/cars"));
        assert!(!mapped.to_string().contains("secret"));
    }
}
