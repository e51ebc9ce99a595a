//! Tour types for Panotour.
//!
//! Tours are ordered collections of 360° panoramas with shared metadata,
//! owned by one user. The persistence service is the source of truth for
//! durable state; these types are the in-memory reflection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ImageId, ShareToken, TourId, UserId};
use crate::image::TourImage;

/// Publication status of a tour.
///
/// Status only ever advances along `draft → processing → published`;
/// writing the same status again is a no-op. Regressions are rejected at
/// the store layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TourStatus {
    /// Freshly created, no images processed yet.
    #[default]
    Draft,
    /// At least one image has been uploaded.
    Processing,
    /// Publicly viewable through its share link.
    Published,
}

impl TourStatus {
    fn rank(self) -> u8 {
        match self {
            TourStatus::Draft => 0,
            TourStatus::Processing => 1,
            TourStatus::Published => 2,
        }
    }

    /// Returns true if moving from `self` to `next` does not regress.
    pub fn can_advance_to(self, next: TourStatus) -> bool {
        self.rank() <= next.rank()
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TourStatus::Draft => "draft",
            TourStatus::Processing => "processing",
            TourStatus::Published => "published",
        };
        write!(f, "{}", label)
    }
}

/// A virtual tour owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Unique identifier for the tour.
    pub id: TourId,

    /// Owning user.
    pub user_id: UserId,

    /// Display title.
    pub title: String,

    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication status.
    pub status: TourStatus,

    /// Total views, incremented by the persistence service only.
    pub view_count: u32,

    /// Thumbnail URL, set from the first uploaded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Opaque token permitting unauthenticated viewing via a share link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<ShareToken>,

    /// When the tour was created.
    pub created_at: DateTime<Utc>,

    /// When the tour was last updated.
    pub updated_at: DateTime<Utc>,

    /// Panoramas in display order.
    #[serde(default)]
    pub images: Vec<TourImage>,
}

impl Tour {
    /// Creates a new draft tour with a fresh share token and no images.
    pub fn new(
        user_id: impl Into<UserId>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TourId::new(),
            user_id: user_id.into(),
            title: title.into(),
            description,
            status: TourStatus::Draft,
            view_count: 0,
            thumbnail_url: None,
            share_token: Some(ShareToken::new()),
            created_at: now,
            updated_at: now,
            images: Vec::new(),
        }
    }

    /// Updates the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Images sorted by order index.
    pub fn ordered_images(&self) -> Vec<&TourImage> {
        let mut images: Vec<&TourImage> = self.images.iter().collect();
        images.sort_by_key(|img| img.order_index);
        images
    }

    /// The image with the lowest order index, if any.
    pub fn first_image(&self) -> Option<&TourImage> {
        self.images.iter().min_by_key(|img| img.order_index)
    }

    /// Looks up an image by ID.
    pub fn image(&self, id: &ImageId) -> Option<&TourImage> {
        self.images.iter().find(|img| &img.id == id)
    }
}
