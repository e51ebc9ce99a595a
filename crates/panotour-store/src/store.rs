//! TourStore - client-side mirror of the user's tours.
//!
//! The persistence service is the only durable store; this is a
//! read-through cache refreshed whenever the authenticated user changes
//! and reconciled wholesale after mutations whose effects are hard to
//! mirror precisely. Mutations are confirm-then-apply: memory changes
//! only after the remote call has resolved, so there is no optimistic
//! state to roll back.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use panotour_client::{
    AuthUser, ImageInsert, TourBackend, TourInsert, TourPatch,
};
use panotour_models::{default_room_title, Tour, TourId, TourImage, TourStatus};

use crate::cancel::CancelToken;
use crate::error::{Result, StoreError};
use crate::notify::{LogSink, Notice, NoticeSink};

/// A file selected for upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, kept in the storage key.
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Client-side reflection of the current user's tours.
pub struct TourStore<B> {
    backend: Arc<B>,
    sink: Arc<dyn NoticeSink>,
    user: RwLock<Option<AuthUser>>,
    tours: RwLock<Vec<Tour>>,
}

impl<B: TourBackend> TourStore<B> {
    /// Creates a store that logs its notices.
    pub fn new(backend: Arc<B>) -> Self {
        Self::with_sink(backend, Arc::new(LogSink))
    }

    /// Creates a store with an explicit notice sink.
    pub fn with_sink(backend: Arc<B>, sink: Arc<dyn NoticeSink>) -> Self {
        Self {
            backend,
            sink,
            user: RwLock::new(None),
            tours: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the mirrored tours, newest first.
    pub async fn tours(&self) -> Vec<Tour> {
        self.tours.read().await.clone()
    }

    /// Looks up a mirrored tour by ID.
    pub async fn tour(&self, id: &TourId) -> Option<Tour> {
        self.tours.read().await.iter().find(|t| &t.id == id).cloned()
    }

    /// The user the mirror currently reflects.
    pub async fn user(&self) -> Option<AuthUser> {
        self.user.read().await.clone()
    }

    /// Switches the store to a (possibly absent) user and refreshes.
    ///
    /// Transition to unauthenticated clears the local list.
    pub async fn set_user(&self, user: Option<AuthUser>, cancel: &CancelToken) -> Result<()> {
        *self.user.write().await = user;
        self.fetch_tours(cancel).await
    }

    /// Reloads every tour owned by the current user, with nested images,
    /// ordered by creation time descending.
    ///
    /// On failure the prior in-memory list is left untouched.
    pub async fn fetch_tours(&self, cancel: &CancelToken) -> Result<()> {
        self.ensure_live(cancel)?;

        let user = match self.user.read().await.clone() {
            Some(user) => user,
            None => {
                self.tours.write().await.clear();
                return Ok(());
            }
        };

        let fetched = match self.backend.tours_for_user(&user.id).await {
            Ok(tours) => tours,
            Err(err) => {
                self.sink
                    .notify(Notice::error("Error", "Failed to load tours"));
                return Err(err.into());
            }
        };
        self.ensure_live(cancel)?;

        debug!(count = fetched.len(), "refreshed tour mirror");
        *self.tours.write().await = fetched;
        Ok(())
    }

    /// Creates a draft tour with a fresh share token and prepends it to
    /// the mirror.
    pub async fn create_tour(
        &self,
        title: &str,
        description: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Tour> {
        self.ensure_live(cancel)?;
        let user = self
            .user
            .read()
            .await
            .clone()
            .ok_or(StoreError::Unauthenticated)?;

        let insert = TourInsert::draft(user.id, title, description.map(str::to_string));
        let tour = match self.backend.insert_tour(insert).await {
            Ok(tour) => tour,
            Err(err) => {
                self.sink.notify(Notice::error("Error", err.to_string()));
                return Err(err.into());
            }
        };
        self.ensure_live(cancel)?;

        self.tours.write().await.insert(0, tour.clone());
        self.sink.notify(Notice::info(
            "Tour created",
            "Your new tour has been created successfully.",
        ));
        Ok(tour)
    }

    /// Persists a partial update, then mirrors it by identifier match.
    ///
    /// Status regressions are rejected before any network call.
    pub async fn update_tour(
        &self,
        id: &TourId,
        patch: TourPatch,
        cancel: &CancelToken,
    ) -> Result<()> {
        self.ensure_live(cancel)?;

        let current_status = {
            let tours = self.tours.read().await;
            let tour = tours
                .iter()
                .find(|t| &t.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            tour.status
        };
        if let Some(next) = patch.status {
            if !current_status.can_advance_to(next) {
                let err = StoreError::StatusRegression {
                    from: current_status,
                    to: next,
                };
                self.sink.notify(Notice::error("Error", err.to_string()));
                return Err(err);
            }
        }

        let patch = patch.stamped();
        if let Err(err) = self.backend.update_tour(id, &patch).await {
            self.sink.notify(Notice::error("Error", err.to_string()));
            return Err(err.into());
        }
        self.ensure_live(cancel)?;

        let mut tours = self.tours.write().await;
        if let Some(tour) = tours.iter_mut().find(|t| &t.id == id) {
            patch.apply_to(tour);
        }
        drop(tours);

        self.sink.notify(Notice::info(
            "Tour updated",
            "Your tour has been updated successfully.",
        ));
        Ok(())
    }

    /// Persists a deletion, then removes exactly the matching entry.
    pub async fn delete_tour(&self, id: &TourId, cancel: &CancelToken) -> Result<()> {
        self.ensure_live(cancel)?;

        if let Err(err) = self.backend.delete_tour(id).await {
            self.sink.notify(Notice::error("Error", err.to_string()));
            return Err(err.into());
        }
        self.ensure_live(cancel)?;

        self.tours.write().await.retain(|t| &t.id != id);
        self.sink.notify(Notice::info(
            "Tour deleted",
            "Your tour has been deleted successfully.",
        ));
        Ok(())
    }

    /// Uploads one panorama: stores the binary under a tour-namespaced
    /// key, inserts the image record, and for the first image sets the
    /// tour's thumbnail and advances it to `processing`. Finishes with a
    /// full refetch to reconcile the mirror.
    pub async fn upload_image(
        &self,
        tour_id: &TourId,
        upload: ImageUpload,
        order_index: u32,
        cancel: &CancelToken,
    ) -> Result<TourImage> {
        self.ensure_live(cancel)?;

        let result = self
            .upload_image_inner(tour_id, upload, order_index, cancel)
            .await;
        match result {
            Ok(image) => Ok(image),
            Err(StoreError::Cancelled) => Err(StoreError::Cancelled),
            Err(err) => {
                self.sink
                    .notify(Notice::error("Error", "Failed to upload image"));
                Err(err)
            }
        }
    }

    async fn upload_image_inner(
        &self,
        tour_id: &TourId,
        upload: ImageUpload,
        order_index: u32,
        cancel: &CancelToken,
    ) -> Result<TourImage> {
        let key = format!("{}/{}-{}", tour_id, Uuid::new_v4(), upload.file_name);
        let public_url = self
            .backend
            .upload_object(&key, upload.bytes, &upload.content_type)
            .await?;
        self.ensure_live(cancel)?;

        let image = self
            .backend
            .insert_image(ImageInsert {
                tour_id: tour_id.clone(),
                image_url: public_url.clone(),
                order_index,
                title: Some(default_room_title(order_index)),
            })
            .await?;
        self.ensure_live(cancel)?;

        if order_index == 0 {
            let patch = TourPatch::new()
                .with_status(TourStatus::Processing)
                .with_thumbnail_url(public_url)
                .stamped();
            self.backend.update_tour(tour_id, &patch).await?;
            self.ensure_live(cancel)?;
        }

        // Reconcile rather than hand-compute the mirror patch. A failed
        // refetch already posted its own notice; the upload itself stands.
        if let Err(err) = self.fetch_tours(cancel).await {
            if matches!(err, StoreError::Cancelled) {
                return Err(err);
            }
            warn!("post-upload refresh failed: {}", err);
        }

        Ok(image)
    }

    /// The tour-creation flow: create, then upload each file strictly
    /// sequentially in order-index order. Image `i + 1` is not started
    /// until image `i` has fully persisted, so index assignment matches
    /// upload order. Aborts on the first failure and re-raises it.
    pub async fn create_tour_with_images(
        &self,
        title: &str,
        description: Option<&str>,
        uploads: Vec<ImageUpload>,
        cancel: &CancelToken,
    ) -> Result<Tour> {
        let tour = self.create_tour(title, description, cancel).await?;

        let total = uploads.len();
        for (index, upload) in uploads.into_iter().enumerate() {
            self.upload_image(&tour.id, upload, index as u32, cancel)
                .await?;
            debug!(tour = %tour.id, done = index + 1, total, "upload progress");
        }

        Ok(self.tour(&tour.id).await.unwrap_or(tour))
    }

    /// Publishes a tour.
    ///
    /// Precondition: the tour is in `processing`. There is no implicit
    /// publish trigger anywhere else.
    pub async fn publish_tour(&self, id: &TourId, cancel: &CancelToken) -> Result<()> {
        self.ensure_live(cancel)?;

        let status = self
            .tour(id)
            .await
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?
            .status;
        if status != TourStatus::Processing {
            let err = StoreError::PublishPrecondition { status };
            self.sink.notify(Notice::error("Error", err.to_string()));
            return Err(err);
        }

        let patch = TourPatch::new().with_status(TourStatus::Published).stamped();
        if let Err(err) = self.backend.update_tour(id, &patch).await {
            self.sink.notify(Notice::error("Error", err.to_string()));
            return Err(err.into());
        }
        self.ensure_live(cancel)?;

        let mut tours = self.tours.write().await;
        if let Some(tour) = tours.iter_mut().find(|t| &t.id == id) {
            patch.apply_to(tour);
        }
        drop(tours);

        self.sink
            .notify(Notice::info("Tour published", "Your tour is now live."));
        Ok(())
    }

    fn ensure_live(&self, cancel: &CancelToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemorySink, NoticeLevel};
    use panotour_client::{AuthBackend, InMemoryBackend};

    async fn signed_in_store() -> (Arc<InMemoryBackend>, Arc<MemorySink>, TourStore<InMemoryBackend>)
    {
        let backend = Arc::new(InMemoryBackend::new());
        let sink = Arc::new(MemorySink::new());
        let store = TourStore::with_sink(backend.clone(), sink.clone());

        let session = backend
            .sign_up("ada@example.com", "password-1", "Ada")
            .await
            .unwrap();
        store
            .set_user(Some(session.user), &CancelToken::new())
            .await
            .unwrap();
        sink.drain();
        (backend, sink, store)
    }

    fn upload(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[tokio::test]
    async fn test_create_tour_draft_with_share_token() {
        let (_, sink, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("My Tour", None, &cancel).await.unwrap();

        assert_eq!(tour.status, TourStatus::Draft);
        assert_eq!(tour.view_count, 0);
        assert!(tour.share_token.is_some());

        // Appears at index 0 immediately after the call resolves.
        let tours = store.tours().await;
        assert_eq!(tours[0].id, tour.id);

        let notices = sink.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_create_tour_prepends() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        store.create_tour("First", None, &cancel).await.unwrap();
        let second = store.create_tour("Second", None, &cancel).await.unwrap();

        assert_eq!(store.tours().await[0].id, second.id);
    }

    #[tokio::test]
    async fn test_create_tour_requires_user() {
        let backend = Arc::new(InMemoryBackend::new());
        let sink = Arc::new(MemorySink::new());
        let store = TourStore::with_sink(backend, sink.clone());

        let result = store
            .create_tour("My Tour", None, &CancelToken::new())
            .await;
        assert!(matches!(result, Err(StoreError::Unauthenticated)));
        // No toast for the precondition the UI already enforces.
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_prior_list() {
        let (backend, sink, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        store.create_tour("Kept", None, &cancel).await.unwrap();
        sink.drain();

        backend.fail_next_with("connection reset").await;
        assert!(store.fetch_tours(&cancel).await.is_err());

        let tours = store.tours().await;
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].title, "Kept");

        let notices = sink.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Failed to load tours");
    }

    #[tokio::test]
    async fn test_sign_out_clears_list() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        store.create_tour("Mine", None, &cancel).await.unwrap();
        store.set_user(None, &cancel).await.unwrap();

        assert!(store.tours().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_mirrors_patch() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Before", None, &cancel).await.unwrap();
        store
            .update_tour(
                &tour.id,
                TourPatch::new().with_title("After"),
                &cancel,
            )
            .await
            .unwrap();

        assert_eq!(store.tour(&tour.id).await.unwrap().title, "After");
    }

    #[tokio::test]
    async fn test_update_failure_leaves_mirror() {
        let (backend, sink, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Before", None, &cancel).await.unwrap();
        sink.drain();

        backend.fail_next_with("constraint violation").await;
        let result = store
            .update_tour(&tour.id, TourPatch::new().with_title("After"), &cancel)
            .await;

        assert!(matches!(result, Err(StoreError::Backend(_))));
        assert_eq!(store.tour(&tour.id).await.unwrap().title, "Before");

        let notices = sink.drain();
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert!(notices[0].message.contains("constraint violation"));
    }

    #[tokio::test]
    async fn test_status_regression_rejected_locally() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Tour", None, &cancel).await.unwrap();
        store
            .update_tour(
                &tour.id,
                TourPatch::new().with_status(TourStatus::Processing),
                &cancel,
            )
            .await
            .unwrap();

        let result = store
            .update_tour(
                &tour.id,
                TourPatch::new().with_status(TourStatus::Draft),
                &cancel,
            )
            .await;

        assert!(matches!(result, Err(StoreError::StatusRegression { .. })));
        assert_eq!(
            store.tour(&tour.id).await.unwrap().status,
            TourStatus::Processing
        );
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_matching_entry() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let a = store.create_tour("A", None, &cancel).await.unwrap();
        let b = store.create_tour("B", None, &cancel).await.unwrap();
        let c = store.create_tour("C", None, &cancel).await.unwrap();

        store.delete_tour(&b.id, &cancel).await.unwrap();

        let remaining: Vec<TourId> = store.tours().await.into_iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![c.id, a.id]);
    }

    #[tokio::test]
    async fn test_upload_three_images() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store
            .create_tour_with_images(
                "Flat",
                Some("Three rooms"),
                vec![upload("a.jpg"), upload("b.jpg"), upload("c.jpg")],
                &cancel,
            )
            .await
            .unwrap();

        assert_eq!(tour.status, TourStatus::Processing);
        assert_eq!(tour.images.len(), 3);

        let mut indices: Vec<u32> = tour.images.iter().map(|i| i.order_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);

        let first = tour.first_image().unwrap();
        assert_eq!(tour.thumbnail_url.as_deref(), Some(first.image_url.as_str()));
        assert_eq!(first.title.as_deref(), Some("Room 1"));
    }

    #[tokio::test]
    async fn test_upload_batch_aborts_on_first_failure() {
        let (backend, sink, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Flat", None, &cancel).await.unwrap();
        store
            .upload_image(&tour.id, upload("a.jpg"), 0, &cancel)
            .await
            .unwrap();
        sink.drain();

        backend.fail_next_with("storage unavailable").await;
        let result = store
            .upload_image(&tour.id, upload("b.jpg"), 1, &cancel)
            .await;
        assert!(result.is_err());

        let notices = sink.drain();
        assert!(notices
            .iter()
            .any(|n| n.message == "Failed to upload image"));

        // Only the first image persisted.
        let mirrored = store.tour(&tour.id).await.unwrap();
        assert_eq!(mirrored.images.len(), 1);
        assert_eq!(mirrored.images[0].order_index, 0);
    }

    #[tokio::test]
    async fn test_upload_namespaces_storage_key() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Flat", None, &cancel).await.unwrap();
        let image = store
            .upload_image(&tour.id, upload("pano.jpg"), 0, &cancel)
            .await
            .unwrap();

        let prefix = format!("memory://tour-images/{}/", tour.id);
        assert!(image.image_url.starts_with(&prefix));
        assert!(image.image_url.ends_with("-pano.jpg"));
    }

    #[tokio::test]
    async fn test_publish_requires_processing() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Draft", None, &cancel).await.unwrap();
        let result = store.publish_tour(&tour.id, &cancel).await;
        assert!(matches!(
            result,
            Err(StoreError::PublishPrecondition {
                status: TourStatus::Draft
            })
        ));
    }

    #[tokio::test]
    async fn test_publish_from_processing() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store
            .create_tour_with_images("Flat", None, vec![upload("a.jpg")], &cancel)
            .await
            .unwrap();
        store.publish_tour(&tour.id, &cancel).await.unwrap();

        assert_eq!(
            store.tour(&tour.id).await.unwrap().status,
            TourStatus::Published
        );
    }

    #[tokio::test]
    async fn test_cancelled_token_discards_operation() {
        let (_, sink, store) = signed_in_store().await;

        store
            .create_tour("Kept", None, &CancelToken::new())
            .await
            .unwrap();
        sink.drain();

        let cancelled = CancelToken::new();
        cancelled.cancel();

        let result = store.fetch_tours(&cancelled).await;
        assert!(matches!(result, Err(StoreError::Cancelled)));

        // Mirror untouched, no notice for a caller that is gone.
        assert_eq!(store.tours().await.len(), 1);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_view_count_survives_reconcile() {
        let (_, _, store) = signed_in_store().await;
        let cancel = CancelToken::new();

        let tour = store.create_tour("Viewed", None, &cancel).await.unwrap();
        store
            .upload_image(&tour.id, upload("a.jpg"), 0, &cancel)
            .await
            .unwrap();

        // Nothing in the store ever touches the counter.
        assert_eq!(store.tour(&tour.id).await.unwrap().view_count, 0);
    }
}
