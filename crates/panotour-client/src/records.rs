//! Wire records for the persistence service.
//!
//! The service speaks snake_case records over two collections (`tours`,
//! `tour_images`). Conversion into model types happens here, and this is
//! also where the untyped hotspot column is validated: a malformed
//! payload is an error at this boundary, never an opaque blob passed
//! through to the viewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use panotour_models::{
    Hotspot, ImageId, ShareToken, Tour, TourId, TourImage, TourStatus, UserId,
};

use crate::error::Result;

/// A `tours` row as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct TourRecord {
    pub id: TourId,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub status: TourStatus,
    pub view_count: u32,
    pub thumbnail_url: Option<String>,
    pub share_token: Option<ShareToken>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Nested images when the query selects them.
    #[serde(default)]
    pub tour_images: Vec<ImageRecord>,
}

impl TourRecord {
    /// Converts the wire record into the model type, validating every
    /// image's hotspot payload.
    pub fn into_tour(self) -> Result<Tour> {
        let mut images = Vec::with_capacity(self.tour_images.len());
        for record in self.tour_images {
            images.push(record.into_image()?);
        }
        images.sort_by_key(|img: &TourImage| img.order_index);

        Ok(Tour {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            status: self.status,
            view_count: self.view_count,
            thumbnail_url: self.thumbnail_url,
            share_token: self.share_token,
            created_at: self.created_at,
            updated_at: self.updated_at,
            images,
        })
    }
}

/// A `tour_images` row as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub tour_id: TourId,
    pub image_url: String,
    pub order_index: u32,
    pub title: Option<String>,
    /// Untyped on the wire; validated during conversion.
    #[serde(default)]
    pub hotspots: Option<serde_json::Value>,
}

impl ImageRecord {
    /// Converts the wire record into the model type.
    pub fn into_image(self) -> Result<TourImage> {
        let hotspots = match &self.hotspots {
            Some(value) => Hotspot::parse_payload(value)?,
            None => Vec::new(),
        };
        Ok(TourImage {
            id: self.id,
            tour_id: self.tour_id,
            image_url: self.image_url,
            order_index: self.order_index,
            title: self.title,
            hotspots,
        })
    }
}

/// Insert payload for a new tour.
#[derive(Debug, Clone, Serialize)]
pub struct TourInsert {
    pub user_id: UserId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TourStatus,
    pub view_count: u32,
    pub share_token: ShareToken,
}

impl TourInsert {
    /// A draft insert with zero views and a fresh share token.
    pub fn draft(
        user_id: impl Into<UserId>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            description,
            status: TourStatus::Draft,
            view_count: 0,
            share_token: ShareToken::new(),
        }
    }
}

/// Insert payload for a new image record.
#[derive(Debug, Clone, Serialize)]
pub struct ImageInsert {
    pub tour_id: TourId,
    pub image_url: String,
    pub order_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Partial update for a tour; only present fields are written.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TourPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TourStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TourPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TourStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Stamps the update time; called by the store before persisting.
    pub fn stamped(mut self) -> Self {
        self.updated_at = Some(Utc::now());
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.thumbnail_url.is_none()
            && self.updated_at.is_none()
    }

    /// Mirrors the patch onto an in-memory tour after the service has
    /// confirmed the write.
    pub fn apply_to(&self, tour: &mut Tour) {
        if let Some(title) = &self.title {
            tour.title = title.clone();
        }
        if let Some(description) = &self.description {
            tour.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            tour.status = status;
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            tour.thumbnail_url = Some(thumbnail_url.clone());
        }
        if let Some(updated_at) = self.updated_at {
            tour.updated_at = updated_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tour_record_deserialization() {
        let json = r#"{
            "id": "tour-1",
            "user_id": "user-1",
            "title": "Loft",
            "description": null,
            "status": "processing",
            "view_count": 12,
            "thumbnail_url": "https://cdn.example/thumb.jpg",
            "share_token": "share-abc",
            "created_at": "2025-05-01T10:00:00Z",
            "updated_at": "2025-05-02T10:00:00Z",
            "tour_images": [
                {
                    "id": "img-2",
                    "tour_id": "tour-1",
                    "image_url": "https://cdn.example/b.jpg",
                    "order_index": 1,
                    "title": "Room 2",
                    "hotspots": null
                },
                {
                    "id": "img-1",
                    "tour_id": "tour-1",
                    "image_url": "https://cdn.example/a.jpg",
                    "order_index": 0,
                    "title": "Room 1",
                    "hotspots": [
                        {
                            "id": "hot-1",
                            "position": {"x": 10.0, "y": 0.0, "z": -20.0},
                            "label": "Kitchen",
                            "target_image": "img-2"
                        }
                    ]
                }
            ]
        }"#;

        let record: TourRecord = serde_json::from_str(json).unwrap();
        let tour = record.into_tour().unwrap();

        assert_eq!(tour.title, "Loft");
        assert_eq!(tour.status, TourStatus::Processing);
        assert_eq!(tour.view_count, 12);
        // Images come back sorted by order index.
        assert_eq!(tour.images[0].order_index, 0);
        assert_eq!(tour.images[0].hotspots.len(), 1);
        assert_eq!(tour.images[1].hotspots.len(), 0);
    }

    #[test]
    fn test_tour_record_without_images() {
        let json = r#"{
            "id": "tour-1",
            "user_id": "user-1",
            "title": "Bare",
            "description": "No rooms yet",
            "status": "draft",
            "view_count": 0,
            "thumbnail_url": null,
            "share_token": null,
            "created_at": "2025-05-01T10:00:00Z",
            "updated_at": "2025-05-01T10:00:00Z"
        }"#;

        let tour: Tour = serde_json::from_str::<TourRecord>(json)
            .unwrap()
            .into_tour()
            .unwrap();
        assert!(tour.images.is_empty());
        assert_eq!(tour.description.as_deref(), Some("No rooms yet"));
    }

    #[test]
    fn test_malformed_hotspots_rejected_at_boundary() {
        let record = ImageRecord {
            id: ImageId::from("img-1"),
            tour_id: TourId::from("tour-1"),
            image_url: "a.jpg".to_string(),
            order_index: 0,
            title: None,
            hotspots: Some(json!("not an array")),
        };
        assert!(record.into_image().is_err());
    }

    #[test]
    fn test_tour_insert_draft() {
        let insert = TourInsert::draft("user-1", "My Tour", None);
        assert_eq!(insert.status, TourStatus::Draft);
        assert_eq!(insert.view_count, 0);

        let json = serde_json::to_value(&insert).unwrap();
        assert_eq!(json["status"], "draft");
        assert!(json.get("description").is_none());
        assert!(json["share_token"].as_str().unwrap().starts_with("share-"));
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = TourPatch::new().with_status(TourStatus::Processing);
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json["status"], "processing");
        assert!(json.get("title").is_none());
        assert!(json.get("thumbnail_url").is_none());
    }

    #[test]
    fn test_patch_apply_to() {
        let mut tour = Tour::new("user-1", "Before", None);
        let patch = TourPatch::new()
            .with_title("After")
            .with_thumbnail_url("thumb.jpg")
            .stamped();

        patch.apply_to(&mut tour);

        assert_eq!(tour.title, "After");
        assert_eq!(tour.thumbnail_url.as_deref(), Some("thumb.jpg"));
        assert_eq!(tour.updated_at, patch.updated_at.unwrap());
        // Untouched fields survive.
        assert_eq!(tour.status, TourStatus::Draft);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TourPatch::new().is_empty());
        assert!(!TourPatch::new().with_title("x").is_empty());
    }
}
