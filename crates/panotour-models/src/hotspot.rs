//! Hotspot types.
//!
//! A hotspot is a clickable marker positioned in a panorama's 3D space.
//! It either labels a point of interest or links to another panorama via
//! `target_image`. The persistence service stores hotspots as untyped JSON;
//! this module is the typed shape that payload must deserialize into.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{HotspotId, ImageId};

/// Error produced when a stored hotspot payload fails validation.
#[derive(Debug, Error)]
pub enum HotspotError {
    /// The payload was not a JSON array of hotspot objects.
    #[error("malformed hotspot payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A coordinate was not a finite number.
    #[error("non-finite hotspot position in {0}")]
    NonFinitePosition(String),
}

/// A point in the panorama sphere's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance from the sphere's center.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns true if all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Position {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// A clickable marker inside a panorama.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Unique within its owning image.
    pub id: HotspotId,

    /// Placement in the panorama sphere's coordinate space.
    pub position: Position,

    /// Display label shown to the viewer.
    pub label: String,

    /// Image to jump to when clicked. Absent for label-only hotspots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_image: Option<ImageId>,
}

impl Hotspot {
    /// Creates a label-only hotspot.
    pub fn new(position: impl Into<Position>, label: impl Into<String>) -> Self {
        Self {
            id: HotspotId::new(),
            position: position.into(),
            label: label.into(),
            target_image: None,
        }
    }

    /// Creates a navigation hotspot targeting another image.
    pub fn linking_to(
        position: impl Into<Position>,
        label: impl Into<String>,
        target: impl Into<ImageId>,
    ) -> Self {
        Self {
            id: HotspotId::new(),
            position: position.into(),
            label: label.into(),
            target_image: Some(target.into()),
        }
    }

    /// Returns true if this hotspot navigates to another panorama.
    pub fn is_navigation(&self) -> bool {
        self.target_image.is_some()
    }

    /// Validates and deserializes a stored hotspot payload.
    ///
    /// The persistence service keeps hotspots as an untyped JSON column;
    /// this is the boundary where that payload becomes typed. `null` is
    /// treated as an empty list (images start with no hotspots).
    pub fn parse_payload(value: &serde_json::Value) -> Result<Vec<Hotspot>, HotspotError> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        let hotspots: Vec<Hotspot> = serde_json::from_value(value.clone())?;
        for hotspot in &hotspots {
            if !hotspot.position.is_finite() {
                return Err(HotspotError::NonFinitePosition(hotspot.id.to_string()));
            }
        }
        Ok(hotspots)
    }
}
