//! Panorama viewer model for Panotour.
//!
//! Everything the renderer needs, minus the renderer: sphere and camera
//! descriptors, orbit-control constraints, hotspot marker styling and
//! animation, the texture load lifecycle, and the viewer's navigation
//! state. Rendering itself is delegated to an external 3D library that
//! consumes these descriptors.

pub mod controls;
pub mod marker;
pub mod nav;
pub mod scene;
pub mod state;
pub mod texture;

pub use controls::OrbitSettings;
pub use marker::{MarkerAnimation, MarkerStyle, HOVER_SCALE, SPIN_PER_FRAME};
pub use nav::{hotspot_action, resolve_hotspot_click, HotspotAction};
pub use scene::{CameraSettings, SphereGeometry};
pub use state::{ViewerEvent, ViewerScene};
pub use texture::TextureSlot;
