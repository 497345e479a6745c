//! Screen crate for the movie showcase.
//!
//! This crate contains the binding that drives the movie-list screen:
//! the view and notifier seams, the host clock, the details handoff,
//! and the lifecycle-scoped dual subscription over the feed.

pub mod binding;
pub mod clock;
pub mod details;
pub mod view;

pub use binding::ScreenBinding;
pub use clock::{Clock, SystemClock};
pub use details::MovieDetails;
pub use view::{ErrorNotifier, MovieListView};
