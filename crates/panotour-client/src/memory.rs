//! In-memory backend for development and testing.
//!
//! Implements both backend traits over process-local state with the same
//! observable behavior as the REST client: newest-first tour listing,
//! not-found errors, session handling. Also supports injecting a one-shot
//! failure so callers' error paths can be exercised.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use panotour_models::{Tour, TourId, TourImage, UserId};

use crate::backend::{AuthBackend, AuthUser, Session, TourBackend};
use crate::error::{ClientError, Result};
use crate::records::{ImageInsert, TourInsert, TourPatch};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    user: AuthUser,
}

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

/// Process-local backend.
#[derive(Default)]
pub struct InMemoryBackend {
    /// Tours, newest first.
    tours: RwLock<Vec<Tour>>,
    accounts: RwLock<HashMap<String, Account>>,
    session: RwLock<Option<Session>>,
    objects: RwLock<HashMap<String, StoredObject>>,
    fail_next: RwLock<Option<String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next backend operation fail with the given message.
    pub async fn fail_next_with(&self, message: impl Into<String>) {
        *self.fail_next.write().await = Some(message.into());
    }

    /// Number of stored binary objects.
    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Size and content type of a stored object.
    pub async fn object_info(&self, key: &str) -> Option<(usize, String)> {
        self.objects
            .read()
            .await
            .get(key)
            .map(|o| (o.bytes.len(), o.content_type.clone()))
    }

    /// Seeds a tour directly, bypassing the insert path.
    pub async fn seed_tour(&self, tour: Tour) {
        self.tours.write().await.insert(0, tour);
    }

    async fn take_failure(&self) -> Result<()> {
        if let Some(message) = self.fail_next.write().await.take() {
            return Err(ClientError::Api {
                status: 500,
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TourBackend for InMemoryBackend {
    async fn tours_for_user(&self, user: &UserId) -> Result<Vec<Tour>> {
        self.take_failure().await?;
        let tours = self.tours.read().await;
        Ok(tours
            .iter()
            .filter(|t| &t.user_id == user)
            .cloned()
            .collect())
    }

    async fn insert_tour(&self, insert: TourInsert) -> Result<Tour> {
        self.take_failure().await?;
        let mut tour = Tour::new(insert.user_id, insert.title, insert.description);
        tour.status = insert.status;
        tour.view_count = insert.view_count;
        tour.share_token = Some(insert.share_token);

        self.tours.write().await.insert(0, tour.clone());
        Ok(tour)
    }

    async fn update_tour(&self, id: &TourId, patch: &TourPatch) -> Result<()> {
        self.take_failure().await?;
        let mut tours = self.tours.write().await;
        let tour = tours
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("tour not found: {}", id)))?;
        patch.apply_to(tour);
        Ok(())
    }

    async fn delete_tour(&self, id: &TourId) -> Result<()> {
        self.take_failure().await?;
        let mut tours = self.tours.write().await;
        let before = tours.len();
        tours.retain(|t| &t.id != id);
        if tours.len() == before {
            return Err(ClientError::NotFound(format!("tour not found: {}", id)));
        }
        Ok(())
    }

    async fn insert_image(&self, insert: ImageInsert) -> Result<TourImage> {
        self.take_failure().await?;
        let mut tours = self.tours.write().await;
        let tour = tours
            .iter_mut()
            .find(|t| t.id == insert.tour_id)
            .ok_or_else(|| ClientError::NotFound(format!("tour not found: {}", insert.tour_id)))?;

        let mut image = TourImage::new(insert.tour_id, insert.image_url, insert.order_index);
        image.title = insert.title;
        tour.images.push(image.clone());
        Ok(image)
    }

    async fn upload_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        self.take_failure().await?;
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(format!("memory://tour-images/{}", key))
    }
}

#[async_trait]
impl AuthBackend for InMemoryBackend {
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session> {
        self.take_failure().await?;
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(ClientError::Api {
                status: 422,
                message: "user already registered".to_string(),
            });
        }

        let user = AuthUser {
            id: UserId::new(),
            email: email.to_string(),
            name: Some(name.to_string()),
        };
        accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                user: user.clone(),
            },
        );

        let session = Session {
            access_token: format!("token-{}", user.id),
            user,
        };
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        self.take_failure().await?;
        let accounts = self.accounts.read().await;
        let account = accounts.get(email).filter(|a| a.password == password);
        let account = account.ok_or(ClientError::Api {
            status: 400,
            message: "invalid login credentials".to_string(),
        })?;

        let session = Session {
            access_token: format!("token-{}", account.user.id),
            user: account.user.clone(),
        };
        drop(accounts);
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>> {
        let session = self.session.read().await;
        Ok(session.as_ref().map(|s| s.user.clone()))
    }
}
