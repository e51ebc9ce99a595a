//! Hotspot marker appearance and idle animation.

use serde::{Deserialize, Serialize};

/// Radians of idle spin applied per animation frame.
pub const SPIN_PER_FRAME: f32 = 0.01;

/// Scale applied while the pointer hovers the marker.
pub const HOVER_SCALE: f32 = 1.2;

/// Visual style of a hotspot marker: a small translucent sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f32,
    pub segments: u32,
    pub color: String,
    pub hover_color: String,
    pub opacity: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 0.3,
            segments: 16,
            color: "#3B82F6".to_string(),
            hover_color: "#60A5FA".to_string(),
            opacity: 0.8,
        }
    }
}

/// Per-marker animation state, advanced once per rendered frame.
///
/// Markers rotate continuously as an idle cue and scale up on hover to
/// signal interactivity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerAnimation {
    pub rotation_y: f32,
    pub hovered: bool,
}

impl MarkerAnimation {
    /// Advances the idle spin by one frame.
    pub fn tick(&mut self) {
        self.rotation_y += SPIN_PER_FRAME;
        if self.rotation_y > std::f32::consts::TAU {
            self.rotation_y -= std::f32::consts::TAU;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Uniform scale for the current frame.
    pub fn scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }
}
