//! Scene descriptors for the panorama sphere and camera.
//!
//! The renderer itself is an external collaborator; these descriptors are
//! what it is handed. The panorama is an equirectangular image mapped onto
//! the interior of a sphere: the sphere is inverted on X so its texture
//! faces inward, and the texture is mirrored horizontally to correct the
//! UV winding that inversion introduces.

use serde::{Deserialize, Serialize};

/// Sphere geometry the panorama texture is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    /// Per-axis scale; X is negative to invert the sphere.
    pub scale: [f32; 3],
    /// Render the inside faces.
    pub back_side: bool,
    /// Mirror the texture horizontally (wrap repeat, repeat.x = -1).
    pub mirror_texture: bool,
}

impl Default for SphereGeometry {
    fn default() -> Self {
        Self {
            radius: 50.0,
            width_segments: 60,
            height_segments: 40,
            scale: [-1.0, 1.0, 1.0],
            back_side: true,
            mirror_texture: true,
        }
    }
}

/// Camera placed at the sphere's center so rotation reads as looking
/// around from inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Nudged slightly off exact center so orbit math stays stable.
    pub position: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 0.1],
        }
    }
}
