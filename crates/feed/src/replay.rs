//! Scripted feed driver for demos and tests.
//!
//! `ReplayFeed` plays a sequence of snapshot fixture files through a
//! `MovieFeed` with a fixed delay between emissions. A fixture that
//! fails to load becomes an error emission, the way a failed fetch
//! would, and the replay moves on to the next fixture.

use crate::channel::MovieFeed;
use catalog::parser::load_snapshot;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Plays fixture files through a feed as successive snapshots.
pub struct ReplayFeed {
    fixtures: Vec<PathBuf>,
    interval: Duration,
}

impl ReplayFeed {
    /// Create a replay over the given fixture files.
    ///
    /// # Arguments
    /// * `fixtures` - Snapshot files, played in order
    /// * `interval` - Delay between emissions
    pub fn new(fixtures: Vec<PathBuf>, interval: Duration) -> Self {
        Self { fixtures, interval }
    }

    /// Play every fixture through the feed, in order.
    ///
    /// Emits one snapshot (or one error) per fixture, sleeping for the
    /// configured interval between emissions.
    pub async fn run(&self, feed: &MovieFeed) {
        for (i, path) in self.fixtures.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.interval).await;
            }
            match load_snapshot(path) {
                Ok(movies) => {
                    info!(
                        "Replaying {}: snapshot with {} movies",
                        path.display(),
                        movies.len()
                    );
                    feed.clear_error();
                    feed.publish_snapshot(movies);
                }
                Err(err) => {
                    warn!("Replaying {}: failed to load ({err})", path.display());
                    feed.publish_error(err.to_string());
                }
            }
        }
        info!("Replay finished after {} fixtures", self.fixtures.len());
    }
}
