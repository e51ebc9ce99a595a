//! Persistence-API access for Panotour.
//!
//! The hosted persistence service owns all durable state: two record
//! collections (`tours`, `tour_images`), binary object storage with
//! public URLs, and the session primitives. This crate provides:
//! - [`TourBackend`] / [`AuthBackend`]: the trait seams everything else
//!   programs against
//! - [`RestClient`]: the production implementation over HTTP
//! - [`InMemoryBackend`]: a process-local implementation for tests and
//!   offline use
//! - wire records with validation of the untyped hotspot column at the
//!   persistence boundary

pub mod backend;
pub mod config;
pub mod error;
pub mod memory;
pub mod records;
pub mod rest;

pub use backend::{AuthBackend, AuthUser, Session, TourBackend};
pub use config::{ClientConfig, API_KEY_ENV, API_URL_ENV};
pub use error::{ClientError, Result};
pub use memory::InMemoryBackend;
pub use records::{ImageInsert, ImageRecord, TourInsert, TourPatch, TourRecord};
pub use rest::RestClient;
