//! Review manager: trim-validated submission and newest-first listing.

use crate::errors::{AppError, AppResult};
use crate::models::review::Review;
use crate::store::SheetStore;
use crate::utils::date;

/// Filter sentinel meaning "every restaurant".
pub const ALL_RESTAURANTS: &str = "all";

/// Append a review stamped with the current time. Bodies that trim to
/// nothing are rejected before any write happens. The body itself is stored
/// as typed; the restaurant key is trimmed.
pub fn submit(store: &mut SheetStore, restaurant: &str, body: &str) -> AppResult<Review> {
    if body.trim().is_empty() {
        return Err(AppError::EmptyReview);
    }

    let stamp = date::now_stamp();
    store.append_review(restaurant, &stamp, body)?;

    Ok(Review {
        restaurant: restaurant.trim().to_string(),
        timestamp: stamp,
        review: body.to_string(),
    })
}

/// Reviews for one restaurant, or all of them when the filter is absent or
/// the `all` sentinel. Sorted newest first; the stamp format makes the
/// lexicographic sort chronological. Equal stamps keep insertion order.
pub fn list(store: &mut SheetStore, filter: Option<&str>) -> AppResult<Vec<Review>> {
    let filter = filter
        .map(str::trim)
        .filter(|f| !f.is_empty() && *f != ALL_RESTAURANTS);

    let mut reviews = store.list_reviews(filter)?;
    reviews.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(reviews)
}
