//! Demo data: the sample tour shown by the marketing page's viewer.
//!
//! Runs entirely against the in-memory backend so it works offline.

use std::sync::Arc;

use panotour_client::{AuthBackend, AuthUser, InMemoryBackend};
use panotour_models::{Hotspot, Tour, TourImage, TourStatus};
use panotour_store::{CancelToken, Result, TourStore};
use panotour_viewer::ViewerScene;

/// The demo panorama URL used when no tour is selected.
pub const PLACEHOLDER_PANORAMA: &str = "/placeholder-panorama.jpg";

/// Builds the sample tour: three rooms linked by navigation hotspots.
pub fn sample_tour(user: &AuthUser) -> Tour {
    let mut tour = Tour::new(user.id.clone(), "Demo Apartment", None);
    tour.status = TourStatus::Processing;

    let mut living = TourImage::new(tour.id.clone(), "/demo/living-room.jpg", 0);
    let mut kitchen = TourImage::new(tour.id.clone(), "/demo/kitchen.jpg", 1);
    let mut bedroom = TourImage::new(tour.id.clone(), "/demo/bedroom.jpg", 2);
    living.title = Some("Living Room".to_string());
    kitchen.title = Some("Kitchen".to_string());
    bedroom.title = Some("Bedroom".to_string());

    living.hotspots = vec![
        Hotspot::linking_to([-15.0, 0.0, 10.0], "Kitchen", kitchen.id.clone()),
        Hotspot::linking_to([0.0, 0.0, 25.0], "Bedroom", bedroom.id.clone()),
    ];
    kitchen.hotspots = vec![Hotspot::linking_to(
        [10.0, 0.0, -20.0],
        "Living Room",
        living.id.clone(),
    )];
    bedroom.hotspots = vec![
        Hotspot::linking_to([10.0, 0.0, -20.0], "Living Room", living.id.clone()),
        Hotspot::new([0.0, 5.0, 10.0], "Skylight"),
    ];

    tour.thumbnail_url = Some(living.image_url.clone());
    tour.images = vec![living, kitchen, bedroom];
    tour
}

/// Signs up the demo account, seeds the sample tour, and returns a store
/// already reflecting it.
pub async fn demo_store() -> Result<(Arc<InMemoryBackend>, TourStore<InMemoryBackend>, Tour)> {
    let backend = Arc::new(InMemoryBackend::new());
    let session = backend
        .sign_up("demo@panotour.example", "demo-password", "Demo")
        .await?;

    let tour = sample_tour(&session.user);
    backend.seed_tour(tour.clone()).await;

    let store = TourStore::new(backend.clone());
    store
        .set_user(Some(session.user), &CancelToken::new())
        .await?;

    Ok((backend, store, tour))
}

/// Opens the viewer on the sample tour's first room.
pub fn demo_scene(tour: &Tour) -> Option<ViewerScene> {
    ViewerScene::for_tour(tour)
}
