//! Filter that keeps only movies released in the current year.
//!
//! This is the showcase's headline rule: the visible list contains this
//! year's releases and nothing else.

use crate::context::ShapingContext;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;

/// Retains movies whose release date starts with the current year.
///
/// ## Algorithm
/// 1. If the context year is malformed, retain nothing
/// 2. Otherwise keep exactly the movies with a present release date
///    whose text starts with the year
///
/// The comparison is an exact 4-character prefix match. No date parsing,
/// no timezone logic.
pub struct ReleaseYearFilter;

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(&self, movies: Vec<Movie>, context: &ShapingContext) -> Result<Vec<Movie>> {
        if !context.year_is_valid() {
            return Ok(Vec::new());
        }
        let retained: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| movie.released_in(&context.current_year))
            .collect();
        Ok(retained)
    }
}
