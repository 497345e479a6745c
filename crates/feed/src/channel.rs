//! Snapshot and error channels.
//!
//! A `MovieFeed` carries two independent emission channels:
//! - movie-list snapshots: each published list is the complete current
//!   listing and supersedes the previous one
//! - error text: opaque display strings, with `""` as the explicit
//!   "no error" sentinel
//!
//! Both are `tokio::sync::watch` channels, so a consumer always observes
//! the latest value and a slow consumer skips superseded snapshots
//! rather than queueing them. That conflation is deliberate: snapshots
//! are authoritative full sets, not deltas.

use catalog::Movie;
use std::sync::Arc;
use tokio::sync::watch;

/// The "no error" sentinel on the error channel.
pub const NO_ERROR: &str = "";

/// Producer side of the feed.
///
/// Whoever fetches listings owns a `MovieFeed` and publishes into it;
/// the screen subscribes. Publishing never fails, even with no
/// subscribers attached.
pub struct MovieFeed {
    snapshots: watch::Sender<Arc<Vec<Movie>>>,
    errors: watch::Sender<String>,
}

impl MovieFeed {
    /// Create a feed with an empty initial snapshot and no error.
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Arc::new(Vec::new()));
        let (errors, _) = watch::channel(NO_ERROR.to_string());
        Self { snapshots, errors }
    }

    /// Publish a complete snapshot, superseding the previous one.
    pub fn publish_snapshot(&self, movies: Vec<Movie>) {
        tracing::debug!("Publishing snapshot with {} movies", movies.len());
        self.snapshots.send_replace(Arc::new(movies));
    }

    /// Publish an error message for transient display.
    pub fn publish_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Publishing error: {message:?}");
        self.errors.send_replace(message);
    }

    /// Reset the error channel to the "no error" sentinel.
    pub fn clear_error(&self) {
        self.errors.send_replace(NO_ERROR.to_string());
    }

    /// Subscribe to both channels.
    pub fn subscribe(&self) -> FeedSubscription {
        FeedSubscription {
            snapshots: SnapshotChannel {
                rx: self.snapshots.subscribe(),
            },
            errors: ErrorChannel {
                rx: self.errors.subscribe(),
            },
        }
    }
}

impl Default for MovieFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer side of the feed: one receiver per channel.
///
/// `split` hands the two channels to their independent consumer loops.
pub struct FeedSubscription {
    pub snapshots: SnapshotChannel,
    pub errors: ErrorChannel,
}

impl FeedSubscription {
    /// Split into the two independently consumable channels.
    pub fn split(self) -> (SnapshotChannel, ErrorChannel) {
        (self.snapshots, self.errors)
    }
}

/// Receiver for movie-list snapshots.
///
/// Cloning yields an independent consumer positioned at the latest
/// value, which is what lets a deactivated screen re-subscribe.
#[derive(Clone)]
pub struct SnapshotChannel {
    rx: watch::Receiver<Arc<Vec<Movie>>>,
}

impl SnapshotChannel {
    /// Wait for the next snapshot.
    ///
    /// Returns `None` once the producer is gone, which ends the
    /// consumer loop.
    pub async fn next(&mut self) -> Option<Arc<Vec<Movie>>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Make the latest snapshot deliverable again.
    ///
    /// Called on (re)activation so a consumer starting mid-stream
    /// receives the current listing immediately instead of waiting for
    /// the next publish.
    pub fn redeliver_latest(&mut self) {
        self.rx.mark_changed();
    }
}

/// Receiver for error messages.
#[derive(Clone)]
pub struct ErrorChannel {
    rx: watch::Receiver<String>,
}

impl ErrorChannel {
    /// Wait for the next error value, including the empty sentinel.
    ///
    /// Returns `None` once the producer is gone.
    pub async fn next(&mut self) -> Option<String> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Make the latest error value deliverable again.
    pub fn redeliver_latest(&mut self) {
        self.rx.mark_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            release_date: Some("2024-01-01".to_string()),
            popularity: 1.0,
            overview: String::new(),
            poster_path: String::new(),
        }
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_snapshot() {
        let feed = MovieFeed::new();
        let (mut snapshots, _errors) = feed.subscribe().split();

        feed.publish_snapshot(vec![movie("A"), movie("B")]);

        let received = snapshots.next().await.expect("feed still alive");
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].title, "A");
    }

    #[tokio::test]
    async fn test_later_snapshot_supersedes_earlier() {
        let feed = MovieFeed::new();
        let (mut snapshots, _errors) = feed.subscribe().split();

        feed.publish_snapshot(vec![movie("Old")]);
        feed.publish_snapshot(vec![movie("New")]);

        // A consumer that wakes late sees only the latest snapshot.
        let received = snapshots.next().await.expect("feed still alive");
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].title, "New");
    }

    #[tokio::test]
    async fn test_error_channel_is_independent() {
        let feed = MovieFeed::new();
        let (_snapshots, mut errors) = feed.subscribe().split();

        feed.publish_error("Network unreachable");

        assert_eq!(errors.next().await.as_deref(), Some("Network unreachable"));
    }

    #[tokio::test]
    async fn test_clear_error_publishes_sentinel() {
        let feed = MovieFeed::new();
        let (_snapshots, mut errors) = feed.subscribe().split();

        feed.publish_error("boom");
        assert_eq!(errors.next().await.as_deref(), Some("boom"));

        feed.clear_error();
        assert_eq!(errors.next().await.as_deref(), Some(NO_ERROR));
    }

    #[tokio::test]
    async fn test_next_ends_when_producer_dropped() {
        let feed = MovieFeed::new();
        let (mut snapshots, mut errors) = feed.subscribe().split();
        drop(feed);

        assert!(snapshots.next().await.is_none());
        assert!(errors.next().await.is_none());
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_fail() {
        let feed = MovieFeed::new();
        feed.publish_snapshot(vec![movie("Unseen")]);
        feed.publish_error("nobody listening");

        // A subscription taken afterwards can still ask for the latest.
        let (mut snapshots, _errors) = feed.subscribe().split();
        snapshots.redeliver_latest();
        let received = snapshots.next().await.expect("feed still alive");
        assert_eq!(received[0].title, "Unseen");
    }
}
