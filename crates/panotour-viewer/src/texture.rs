//! Panorama texture lifecycle.
//!
//! Texture loading is asynchronous and non-blocking. A failed load leaves
//! the sphere untextured; the failure is logged and never propagated to
//! the caller.

use tracing::warn;

/// Load state of the current panorama texture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextureSlot {
    /// A load is in flight (or nothing has been requested yet).
    #[default]
    Loading,
    /// The texture at this URL is applied to the sphere.
    Ready(String),
    /// The load failed; the sphere renders untextured.
    Failed,
}

impl TextureSlot {
    /// Marks a successful load.
    pub fn loaded(&mut self, url: impl Into<String>) {
        *self = TextureSlot::Ready(url.into());
    }

    /// Marks a failed load. Logged, not surfaced.
    pub fn failed(&mut self, url: &str, reason: &str) {
        warn!(url, reason, "panorama texture load failed");
        *self = TextureSlot::Failed;
    }

    /// Resets the slot when the panorama URL changes.
    pub fn reset(&mut self) {
        *self = TextureSlot::Loading;
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, TextureSlot::Ready(_))
    }
}
