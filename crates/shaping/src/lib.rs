//! Shaping of movie snapshots into the visible list.
//!
//! This crate provides:
//! - Filter trait and implementations for snapshot filtering
//! - ShapingPipeline for composing filters
//! - Popularity ranking of the retained movies
//! - `select`, the one-call entry point the screen binding uses
//!
//! ## Architecture
//! A snapshot is shaped in two stages:
//! 1. Filters drop movies that do not belong in the visible list
//!    (currently: anything not released this year)
//! 2. The survivors are ranked by popularity, highest first
//!
//! ## Example Usage
//! ```ignore
//! use shaping::select;
//!
//! let visible = select(snapshot, "2026")?;
//! view.set_movies(visible);
//! ```

pub mod context;
pub mod filters;
pub mod pipeline;
pub mod ranking;
pub mod traits;

// Re-export main types
pub use context::ShapingContext;
pub use pipeline::ShapingPipeline;
pub use ranking::rank_by_popularity;
pub use traits::Filter;

use anyhow::Result;
use catalog::Movie;
use filters::ReleaseYearFilter;

/// Shape a snapshot into the visible list for the given year.
///
/// Keeps exactly the movies released in `current_year` and orders them
/// by popularity descending. A malformed year or an empty snapshot
/// yields an empty list; neither is an error.
///
/// Pure: no I/O, and the caller's data is consumed rather than mutated.
pub fn select(movies: Vec<Movie>, current_year: &str) -> Result<Vec<Movie>> {
    let context = ShapingContext::for_year(current_year);
    let pipeline = ShapingPipeline::new().add_filter(ReleaseYearFilter);
    let retained = pipeline.apply(movies, &context)?;
    Ok(rank_by_popularity(retained))
}
