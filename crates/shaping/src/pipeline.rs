//! The ShapingPipeline chains filters over a snapshot.
//!
//! This module provides the ShapingPipeline struct that composes
//! multiple filters using the builder pattern.

use crate::context::ShapingContext;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = ShapingPipeline::new().add_filter(ReleaseYearFilter);
/// let retained = pipeline.apply(snapshot, &context)?;
/// ```
pub struct ShapingPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl ShapingPipeline {
    /// Create a new empty ShapingPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the snapshot.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The retained movies after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, movies: Vec<Movie>, context: &ShapingContext) -> Result<Vec<Movie>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for ShapingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ReleaseYearFilter;

    fn movie(title: &str, release_date: Option<&str>) -> Movie {
        Movie {
            title: title.to_string(),
            release_date: release_date.map(|s| s.to_string()),
            popularity: 1.0,
            overview: String::new(),
            poster_path: String::new(),
        }
    }

    #[test]
    fn test_empty_pipeline_passes_snapshot_through() {
        let pipeline = ShapingPipeline::new();
        let context = ShapingContext::for_year("2024");

        let movies = vec![
            movie("A", Some("2024-05-01")),
            movie("B", Some("1990-01-01")),
        ];

        let retained = pipeline.apply(movies, &context).unwrap();
        assert_eq!(retained.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = ShapingPipeline::new().add_filter(ReleaseYearFilter);
        let context = ShapingContext::for_year("2024");

        let movies = vec![
            movie("A", Some("2024-05-01")),
            movie("B", Some("1990-01-01")),
        ];

        let retained = pipeline.apply(movies, &context).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].title, "A");
    }
}
