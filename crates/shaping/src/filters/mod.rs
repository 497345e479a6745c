//! Filter implementations for the shaping pipeline.

pub mod release_year;

// Re-export for convenience
pub use release_year::ReleaseYearFilter;
