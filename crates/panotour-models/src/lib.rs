//! Core data models for Panotour.
//!
//! This crate provides the fundamental data types used throughout the
//! Panotour system: tours, tour images, hotspots, and their typed IDs.

pub mod hotspot;
pub mod ids;
pub mod image;
pub mod tour;

// Re-export main types
pub use hotspot::{Hotspot, HotspotError, Position};
pub use ids::{HotspotId, ImageId, ShareToken, TourId, UserId};
pub use image::{default_room_title, TourImage};
pub use tour::{Tour, TourStatus};
