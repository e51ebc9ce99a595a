//! Dashboard helpers: search filtering and share links.

use panotour_models::{Tour, TourStatus};

/// Filters tours whose title or description contains `query`,
/// case-insensitively. An empty query matches everything.
pub fn filter_tours<'a>(tours: &'a [Tour], query: &str) -> Vec<&'a Tour> {
    let needle = query.to_lowercase();
    tours
        .iter()
        .filter(|tour| {
            tour.title.to_lowercase().contains(&needle)
                || tour
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Returns true if the tour can be shared: published, with a token.
pub fn can_share(tour: &Tour) -> bool {
    tour.status == TourStatus::Published && tour.share_token.is_some()
}

/// Builds the public share link for a tour, if it can be shared.
pub fn share_url(origin: &str, tour: &Tour) -> Option<String> {
    if !can_share(tour) {
        return None;
    }
    let origin = origin.trim_end_matches('/');
    tour.share_token
        .as_ref()
        .map(|token| format!("{}/tour/{}", origin, token))
}
