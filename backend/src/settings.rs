//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `CARS_*` environment variables and an
//! optional configuration file. Only the database URL is mandatory.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, PoolConfig};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Interface bound when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised when settings cannot be turned into runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No database connection string was supplied.
    #[error("database URL is not configured; set CARS_DATABASE_URL or pass --database-url")]
    MissingDatabaseUrl,
    /// The host and port do not resolve to a socket address.
    #[error("cannot resolve bind address {address}: {message}")]
    InvalidBindAddress { address: String, message: String },
}

/// Configuration values for the car inventory service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CARS")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Interface to bind.
    pub host: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a database connection.
    pub connect_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Return the configured database URL.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingDatabaseUrl`] when the value is absent
    /// or blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Return the configured port.
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .unwrap_or(DEFAULT_HOST)
    }

    /// Return the pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Return the connection timeout, falling back to the default.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CONNECTION_TIMEOUT)
    }

    /// Resolve host and port into the address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddress`] when resolution fails.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let port = self.port();
        let invalid = |message: String| SettingsError::InvalidBindAddress {
            address: format!("{host}:{port}"),
            message,
        };
        (host, port)
            .to_socket_addrs()
            .map_err(|err| invalid(err.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses found".to_owned()))
    }

    /// Build the connection pool configuration.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingDatabaseUrl`] when no URL is set.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(self.pool_max_size())
            .with_connection_timeout(self.connect_timeout()))
    }
}
