//! Review log model: one row of the `review log` worksheet.

use serde::Serialize;

/// A free-text review. Append-only, no identity beyond insertion order.
/// The timestamp is kept as the stored `YYYY-MM-DD HH:MM:SS` string, whose
/// lexicographic order matches chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub restaurant: String,
    pub timestamp: String,
    pub review: String,
}
