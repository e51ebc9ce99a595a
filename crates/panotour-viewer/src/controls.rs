//! Orbit control constraints.
//!
//! Camera interaction is delegated to a standard orbit-control behavior;
//! the viewer only constrains it. The camera never leaves the sphere's
//! center, so panning is disabled and zoom is clamped to a narrow band.

use serde::{Deserialize, Serialize};

/// Constraints applied to the orbit controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitSettings {
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Negative so dragging moves the view in the grab direction.
    pub rotate_speed: f32,
}

impl OrbitSettings {
    /// Clamps a requested zoom distance to the configured band.
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_pan: false,
            enable_zoom: true,
            enable_rotate: true,
            min_distance: 0.1,
            max_distance: 1.0,
            rotate_speed: -0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_is_disabled() {
        let orbit = OrbitSettings::default();
        assert!(!orbit.enable_pan);
        assert!(orbit.enable_rotate);
        assert!(orbit.enable_zoom);
    }

    #[test]
    fn test_clamp_distance() {
        let orbit = OrbitSettings::default();
        assert_eq!(orbit.clamp_distance(0.01), 0.1);
        assert_eq!(orbit.clamp_distance(5.0), 1.0);
        assert_eq!(orbit.clamp_distance(0.5), 0.5);
    }

    #[test]
    fn test_rotate_speed_is_inverted() {
        assert!(OrbitSettings::default().rotate_speed < 0.0);
    }
}
