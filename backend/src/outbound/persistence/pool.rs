//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8`. The pool is built once at startup and
//! shared by clone; every repository call checks out one connection for the
//! duration of a single statement.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Default upper bound on open connections.
pub const DEFAULT_MAX_SIZE: u32 = 10;

/// Default time to wait for a connection before failing.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use car_inventory::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://cars@localhost/cars")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration for `database_url` with default limits.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database connection string.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Upper bound on open connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Checkout timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Async connection pool for PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool and open its first connection.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` when the URL is unusable or the database
    /// cannot be reached within the configured timeout.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(1))
            .connection_timeout(config.connection_timeout)
            .test_on_check_out(true)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_defaults() {
        let config = PoolConfig::new("postgres://localhost/cars");

        assert_eq!(config.database_url(), "postgres://localhost/cars");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.connection_timeout(), DEFAULT_CONNECTION_TIMEOUT);
    }

    #[rstest]
    #[case(20, 20)]
    #[case(0, 1)]
    fn max_size_is_at_least_one(#[case] requested: u32, #[case] expected: u32) {
        let config = PoolConfig::new("postgres://localhost/cars").with_max_size(requested);
        assert_eq!(config.max_size(), expected);
    }

    #[rstest]
    fn pool_error_display() {
        assert_eq!(
            PoolError::checkout("timed out").to_string(),
            "failed to get connection from pool: timed out"
        );
        assert_eq!(
            PoolError::build("invalid URL").to_string(),
            "failed to build connection pool: invalid URL"
        );
    }
}
