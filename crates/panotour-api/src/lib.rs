//! Bearer-token auth service for Panotour.
//!
//! A small HTTP service exposing a single JSON auth-check endpoint
//! guarded by a bearer token verified against a shared secret. It is not
//! called by the rest of the application; it runs as its own process.
//!
//! # Example
//!
//! ```ignore
//! use panotour_api::{ApiConfig, AppState, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::from_env()?;
//!     let state = AppState::new(config.clone());
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod token;
pub mod types;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
pub use token::{issue_token, verify_token, TokenError};
