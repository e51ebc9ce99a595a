//! Client configuration.

use crate::error::{ClientError, Result};

/// Environment variable for the persistence-API base URL.
pub const API_URL_ENV: &str = "PANOTOUR_API_URL";

/// Environment variable for the persistence-API public key.
pub const API_KEY_ENV: &str = "PANOTOUR_API_KEY";

/// Storage bucket holding panorama images.
pub const DEFAULT_BUCKET: &str = "tour-images";

/// Configuration for the REST persistence client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the hosted persistence service.
    pub base_url: String,
    /// Public API key sent with every request.
    pub api_key: String,
    /// Object-storage bucket for panorama uploads.
    pub bucket: String,
}

impl ClientConfig {
    /// Creates a configuration with the default bucket.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }

    /// Overrides the storage bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Reads configuration from the environment.
    ///
    /// Fails with a configuration error when a required variable is
    /// absent; missing configuration is never discovered mid-request.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV).map_err(|_| {
            ClientError::Configuration(format!("missing {} environment variable", API_URL_ENV))
        })?;
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            ClientError::Configuration(format!("missing {} environment variable", API_KEY_ENV))
        })?;
        Ok(Self::new(base_url, api_key))
    }
}
