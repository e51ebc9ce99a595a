//! Hotspot click resolution.
//!
//! Resolution maps a clicked marker back to its hotspot record. It has no
//! side effects; the caller decides whether the result navigates or just
//! shows a label callout.

use panotour_models::{Hotspot, HotspotId, ImageId};

/// Effect of activating a hotspot.
#[derive(Debug, Clone, PartialEq)]
pub enum HotspotAction {
    /// Swap the viewer to the target panorama.
    Navigate(ImageId),
    /// Show the hotspot's label callout.
    Label(String),
}

/// Resolves a clicked marker ID against the current hotspot list.
///
/// Returns `None` when the ID is absent: a defensive no-op, since the
/// marker list presented to the user is derived from the same array.
pub fn resolve_hotspot_click<'a>(
    hotspots: &'a [Hotspot],
    clicked: &HotspotId,
) -> Option<&'a Hotspot> {
    hotspots.iter().find(|h| &h.id == clicked)
}

/// Classifies a resolved hotspot into its activation effect.
///
/// The only guard is existence of a target reference; whether that target
/// actually exists in the tour is checked by the viewer state when it
/// performs the swap.
pub fn hotspot_action(hotspot: &Hotspot) -> HotspotAction {
    match &hotspot.target_image {
        Some(target) => HotspotAction::Navigate(target.clone()),
        None => HotspotAction::Label(hotspot.label.clone()),
    }
}
