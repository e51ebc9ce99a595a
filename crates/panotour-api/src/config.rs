//! Auth service configuration.

use std::time::Instant;

use thiserror::Error;

/// Environment variable for the listen port.
pub const PORT_ENV: &str = "PANOTOUR_AUTH_PORT";

/// Environment variable for the shared signing secret.
pub const SECRET_ENV: &str = "PANOTOUR_AUTH_SECRET";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0} environment variable")]
    MissingVar(&'static str),

    #[error("invalid {0} value: {1}")]
    InvalidVar(&'static str, String),
}

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Shared secret tokens are verified against.
    pub auth_secret: String,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ApiConfig {
    /// Creates a configuration with an explicit secret.
    pub fn new(host: impl Into<String>, port: u16, auth_secret: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            auth_secret: auth_secret.into(),
            start_time: Instant::now(),
        }
    }

    /// Reads configuration from the environment.
    ///
    /// The signing secret is required; a service without one would accept
    /// nothing, so its absence is a startup error rather than a silent
    /// gap.
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_secret =
            std::env::var(SECRET_ENV).map_err(|_| ConfigError::MissingVar(SECRET_ENV))?;

        let port = match std::env::var(PORT_ENV) {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar(PORT_ENV, value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self::new("0.0.0.0", port, auth_secret))
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
