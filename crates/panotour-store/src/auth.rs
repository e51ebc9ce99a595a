//! Auth session wrapper.
//!
//! A thin pass-through to the persistence service's session primitives.
//! Token handling, refresh, and session durability are owned entirely by
//! the external service; nothing here caches beyond what the backend
//! itself tracks.

use std::sync::Arc;

use tracing::info;

use panotour_client::{AuthBackend, AuthUser, Session};

use crate::error::Result;

/// Session facade over an [`AuthBackend`].
pub struct AuthSession<B> {
    backend: Arc<B>,
}

impl<B: AuthBackend> AuthSession<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Registers a new account (email, password, display name).
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session> {
        let session = self.backend.sign_up(email, password, name).await?;
        info!(email, "signed up");
        Ok(session)
    }

    /// Opens a session for an existing account.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.backend.sign_in(email, password).await?;
        info!(email, "signed in");
        Ok(session)
    }

    /// Closes the current session.
    pub async fn sign_out(&self) -> Result<()> {
        self.backend.sign_out().await?;
        info!("signed out");
        Ok(())
    }

    /// The currently signed-in user, if any.
    pub async fn current_user(&self) -> Result<Option<AuthUser>> {
        Ok(self.backend.current_user().await?)
    }
}
