//! Core traits for the shaping pipeline.
//!
//! This module defines the Filter trait that allows composable filters
//! to be applied to movie snapshots.

use crate::context::ShapingContext;
use anyhow::Result;
use catalog::Movie;

/// Core trait for filtering a movie snapshot.
///
/// All filters must implement this trait to be used in the ShapingPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with the consumer tasks
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec,
///   so a snapshot moves through the pipeline without cloning
/// - Filters must not perform I/O; everything they need is in the context
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a snapshot.
    ///
    /// # Arguments
    /// * `movies` - The snapshot to filter (takes ownership)
    /// * `context` - Per-snapshot context (current year)
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The retained movies
    /// * `Err` - If filtering fails
    fn apply(&self, movies: Vec<Movie>, context: &ShapingContext) -> Result<Vec<Movie>>;
}
