//! Viewer state: the currently displayed panorama and its hotspots.
//!
//! Navigation is plain substitution of "current image": there are no
//! intermediate states, no guards beyond existence of the target, and no
//! rollback.

use tracing::debug;

use panotour_models::{Hotspot, HotspotId, ImageId, Tour, TourImage};

use crate::nav::{hotspot_action, resolve_hotspot_click, HotspotAction};
use crate::texture::TextureSlot;

/// What a click on the scene produced, reported upward to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// The viewer swapped to another panorama.
    Navigated(ImageId),
    /// A label-only hotspot was activated.
    LabelShown(String),
}

/// In-memory state of the panorama viewer for one tour.
///
/// Owns no persistent state: it is rebuilt from a [`Tour`] and swapped
/// wholesale when navigation occurs.
#[derive(Debug, Clone)]
pub struct ViewerScene {
    current_image: ImageId,
    panorama_url: String,
    hotspots: Vec<Hotspot>,
    texture: TextureSlot,
}

impl ViewerScene {
    /// Builds a scene showing the tour's first image (lowest order index).
    ///
    /// Returns `None` for a tour with no images.
    pub fn for_tour(tour: &Tour) -> Option<Self> {
        tour.first_image().map(Self::for_image)
    }

    /// Builds a scene showing a specific image.
    pub fn for_image(image: &TourImage) -> Self {
        Self {
            current_image: image.id.clone(),
            panorama_url: image.image_url.clone(),
            hotspots: image.hotspots.clone(),
            texture: TextureSlot::Loading,
        }
    }

    pub fn current_image(&self) -> &ImageId {
        &self.current_image
    }

    pub fn panorama_url(&self) -> &str {
        &self.panorama_url
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn texture(&self) -> &TextureSlot {
        &self.texture
    }

    pub fn texture_mut(&mut self) -> &mut TextureSlot {
        &mut self.texture
    }

    /// Handles a click on a hotspot marker.
    ///
    /// Unknown IDs and navigation targets missing from `tour` are silent
    /// no-ops. A successful navigation substitutes the current panorama
    /// and resets the texture slot; a label hotspot is surfaced as-is.
    pub fn click(&mut self, tour: &Tour, clicked: &HotspotId) -> Option<ViewerEvent> {
        let hotspot = resolve_hotspot_click(&self.hotspots, clicked)?;
        match hotspot_action(hotspot) {
            HotspotAction::Navigate(target) => {
                let image = tour.image(&target)?;
                debug!(from = %self.current_image, to = %target, "hotspot navigation");
                *self = Self::for_image(image);
                Some(ViewerEvent::Navigated(target))
            }
            HotspotAction::Label(label) => Some(ViewerEvent::LabelShown(label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panotour_models::TourImage;

    fn tour_with_two_rooms() -> (Tour, HotspotId, ImageId) {
        let mut tour = Tour::new("user-1", "Flat", None);

        let mut first = TourImage::new(tour.id.clone(), "first.jpg", 0);
        let mut second = TourImage::new(tour.id.clone(), "second.jpg", 1);
        second
            .hotspots
            .push(Hotspot::new([0.0, 0.0, 5.0], "Window"));

        let link = Hotspot::linking_to([10.0, 0.0, -20.0], "To bedroom", second.id.clone());
        let link_id = link.id.clone();
        let second_id = second.id.clone();
        first.hotspots.push(link);

        tour.images.push(first);
        tour.images.push(second);
        (tour, link_id, second_id)
    }

    #[test]
    fn test_for_tour_starts_at_lowest_order_index() {
        let (tour, _, _) = tour_with_two_rooms();
        let scene = ViewerScene::for_tour(&tour).unwrap();
        assert_eq!(scene.panorama_url(), "first.jpg");
        assert_eq!(scene.texture(), &TextureSlot::Loading);
    }

    #[test]
    fn test_for_tour_without_images() {
        let tour = Tour::new("user-1", "Empty", None);
        assert!(ViewerScene::for_tour(&tour).is_none());
    }

    #[test]
    fn test_click_navigates_and_substitutes() {
        let (tour, link_id, second_id) = tour_with_two_rooms();
        let mut scene = ViewerScene::for_tour(&tour).unwrap();

        let event = scene.click(&tour, &link_id).unwrap();
        assert_eq!(event, ViewerEvent::Navigated(second_id.clone()));
        assert_eq!(scene.current_image(), &second_id);
        assert_eq!(scene.panorama_url(), "second.jpg");
        assert_eq!(scene.hotspots().len(), 1);
        assert_eq!(scene.texture(), &TextureSlot::Loading);
    }

    #[test]
    fn test_click_label_hotspot() {
        let (tour, link_id, second_id) = tour_with_two_rooms();
        let mut scene = ViewerScene::for_tour(&tour).unwrap();
        scene.click(&tour, &link_id).unwrap();

        let label_id = scene.hotspots()[0].id.clone();
        let event = scene.click(&tour, &label_id).unwrap();
        assert_eq!(event, ViewerEvent::LabelShown("Window".to_string()));
        // Label activation does not move the viewer.
        assert_eq!(scene.current_image(), &second_id);
    }

    #[test]
    fn test_click_unknown_id_is_noop() {
        let (tour, _, _) = tour_with_two_rooms();
        let mut scene = ViewerScene::for_tour(&tour).unwrap();
        let before = scene.panorama_url().to_string();

        assert!(scene.click(&tour, &HotspotId::from("b")).is_none());
        assert_eq!(scene.panorama_url(), before);
    }

    #[test]
    fn test_click_dangling_target_is_noop() {
        let mut tour = Tour::new("user-1", "Broken", None);
        let mut only = TourImage::new(tour.id.clone(), "only.jpg", 0);
        let dangling = Hotspot::linking_to([1.0, 0.0, 0.0], "Gone", "img-missing");
        let dangling_id = dangling.id.clone();
        only.hotspots.push(dangling);
        tour.images.push(only);

        let mut scene = ViewerScene::for_tour(&tour).unwrap();
        assert!(scene.click(&tour, &dangling_id).is_none());
        assert_eq!(scene.panorama_url(), "only.jpg");
    }
}
