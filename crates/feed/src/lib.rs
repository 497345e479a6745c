//! # Feed Crate
//!
//! Emission channels between whoever fetches movie listings and the
//! screen that renders them.
//!
//! ## Components
//!
//! ### MovieFeed
//! Two independent channels:
//! - full movie-list snapshots (replace, not delta)
//! - error-message strings (`""` = "no error")
//!
//! ### ReplayFeed
//! Scripted driver that plays snapshot fixture files through a
//! `MovieFeed`, for demos and tests.
//!
//! ## Example Usage
//!
//! ```ignore
//! use feed::MovieFeed;
//!
//! let feed = MovieFeed::new();
//! let subscription = feed.subscribe();
//!
//! feed.publish_snapshot(movies);
//! feed.publish_error("Network unreachable");
//! ```

// Public modules
pub mod channel;
pub mod replay;

// Re-export commonly used types
pub use channel::{ErrorChannel, FeedSubscription, MovieFeed, SnapshotChannel, NO_ERROR};
pub use replay::ReplayFeed;
