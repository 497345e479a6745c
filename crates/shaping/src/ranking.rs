//! Ordering of the retained snapshot.

use catalog::Movie;

/// Order movies by popularity, highest first.
///
/// The sort is stable, so equal-popularity movies keep their snapshot
/// order (acceptable but not contractual). NaN popularity compares as
/// equal to everything rather than panicking, which leaves its placement
/// unspecified.
pub fn rank_by_popularity(mut movies: Vec<Movie>) -> Vec<Movie> {
    movies.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    movies
}
