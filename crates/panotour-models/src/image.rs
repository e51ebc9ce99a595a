//! Tour image types.

use serde::{Deserialize, Serialize};

use crate::hotspot::Hotspot;
use crate::ids::{HotspotId, ImageId, TourId};

/// A single 360° panorama belonging to a tour.
///
/// `order_index` is unique within a tour and defines both display order
/// and navigation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourImage {
    /// Unique identifier for the image.
    pub id: ImageId,

    /// Tour that owns this image.
    pub tour_id: TourId,

    /// Public URL of the equirectangular image.
    pub image_url: String,

    /// Zero-based position within the tour.
    pub order_index: u32,

    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Navigation markers placed in this panorama.
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

impl TourImage {
    /// Creates an image with the default room title for its position.
    pub fn new(tour_id: impl Into<TourId>, image_url: impl Into<String>, order_index: u32) -> Self {
        Self {
            id: ImageId::new(),
            tour_id: tour_id.into(),
            image_url: image_url.into(),
            order_index,
            title: Some(default_room_title(order_index)),
            hotspots: Vec::new(),
        }
    }

    /// Looks up a hotspot by ID.
    pub fn hotspot(&self, id: &HotspotId) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| &h.id == id)
    }
}

/// Default title for the image at `order_index` ("Room 1", "Room 2", ...).
pub fn default_room_title(order_index: u32) -> String {
    format!("Room {}", order_index + 1)
}
