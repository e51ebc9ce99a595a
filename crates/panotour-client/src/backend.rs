//! Backend trait definitions for the persistence service.
//!
//! Two seams: [`TourBackend`] covers record CRUD plus object storage, and
//! [`AuthBackend`] covers the session primitives. The REST implementation
//! talks to the hosted service; the in-memory implementation backs tests
//! and offline use. Everything above these traits is backend-agnostic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use panotour_models::{Tour, TourId, TourImage, UserId};

use crate::error::Result;
use crate::records::{ImageInsert, TourInsert, TourPatch};

/// The authenticated user as reported by the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Service-assigned user identifier.
    pub id: UserId,
    /// Sign-in email.
    pub email: String,
    /// Display name supplied at sign-up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent with record and storage requests.
    pub access_token: String,
    /// The session's user.
    pub user: AuthUser,
}

/// Record and storage operations against the persistence service.
#[async_trait]
pub trait TourBackend: Send + Sync {
    /// Loads every tour owned by `user`, each with its nested images,
    /// ordered by creation time descending.
    async fn tours_for_user(&self, user: &UserId) -> Result<Vec<Tour>>;

    /// Persists a new tour and returns the stored record.
    async fn insert_tour(&self, insert: TourInsert) -> Result<Tour>;

    /// Applies a partial update to a tour.
    async fn update_tour(&self, id: &TourId, patch: &TourPatch) -> Result<()>;

    /// Deletes a tour. Image records cascade on the service side.
    async fn delete_tour(&self, id: &TourId) -> Result<()>;

    /// Persists a new image record and returns it.
    async fn insert_image(&self, insert: ImageInsert) -> Result<TourImage>;

    /// Stores a binary object and returns its public URL.
    async fn upload_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String>;
}

/// Session primitives of the persistence service.
///
/// A thin pass-through: token refresh and session durability are owned by
/// the external service.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Registers a new account and opens a session.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session>;

    /// Opens a session for an existing account.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Closes the current session. A no-op when signed out.
    async fn sign_out(&self) -> Result<()>;

    /// The currently signed-in user, if any.
    async fn current_user(&self) -> Result<Option<AuthUser>>;
}
