//! Navigation payload for the details surface.

use catalog::Movie;

/// The four fields handed to the details surface when an item is
/// activated. Pure data handoff, no transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub release_date: Option<String>,
    pub overview: String,
    pub poster_path: String,
}

impl From<&Movie> for MovieDetails {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            overview: movie.overview.clone(),
            poster_path: movie.poster_path.clone(),
        }
    }
}
