//! Seams between the binding and the host UI surface.
//!
//! The binding never draws anything itself. It pushes data through these
//! traits and the host decides how (or whether) to render it.

use catalog::Movie;

/// Renders the list of visible movies.
///
/// `set_movies` has replace semantics: the argument is the entire new
/// visible set, superseding whatever was shown before. Each snapshot is
/// recomputed in full, so appending here would double-render movies that
/// survive consecutive snapshots.
pub trait MovieListView: Send + Sync {
    fn set_movies(&self, movies: Vec<Movie>);
}

/// Shows a transient, self-dismissing message to the user.
///
/// Only ever invoked with non-empty text; the empty "no error" sentinel
/// is suppressed before this seam.
pub trait ErrorNotifier: Send + Sync {
    fn show_message(&self, message: &str);
}
