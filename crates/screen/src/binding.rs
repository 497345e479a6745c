//! # Screen Binding
//!
//! This module coordinates the movie-list screen:
//! 1. Subscribe to the feed's snapshot and error channels
//! 2. On each snapshot, read the current year from the clock once,
//!    shape the snapshot, and push the result to the view
//! 3. On each non-empty error, show it via the notifier
//!
//! The two consumer loops are independent tasks scoped to the screen's
//! active lifetime: `activate` starts both, `deactivate` aborts both
//! immediately, with no draining and no ordering guarantees between the
//! two cancellations. No error is fatal to either loop.

use std::sync::Arc;

use feed::{ErrorChannel, FeedSubscription, SnapshotChannel};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::view::{ErrorNotifier, MovieListView};

/// Binds a feed subscription to a view and a notifier for the lifetime
/// of an active screen.
///
/// Collaborators are injected at construction; there is no global
/// registry. The binding holds clonable channel receivers, so it can be
/// activated, deactivated, and activated again as the host surface
/// comes and goes.
pub struct ScreenBinding {
    snapshots: SnapshotChannel,
    errors: ErrorChannel,
    view: Arc<dyn MovieListView>,
    notifier: Arc<dyn ErrorNotifier>,
    clock: Arc<dyn Clock>,
    tasks: Vec<JoinHandle<()>>,
}

impl ScreenBinding {
    /// Create a binding over the given subscription and collaborators.
    pub fn new(
        subscription: FeedSubscription,
        view: Arc<dyn MovieListView>,
        notifier: Arc<dyn ErrorNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (snapshots, errors) = subscription.split();
        Self {
            snapshots,
            errors,
            view,
            notifier,
            clock,
            tasks: Vec::new(),
        }
    }

    /// Start both consumer loops. Idempotent while active.
    ///
    /// The latest value of each channel is redelivered on activation,
    /// so a screen that activates mid-stream renders the current
    /// listing immediately.
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }
        self.tasks.clear();
        info!("Activating screen binding");
        self.tasks.push(self.spawn_snapshot_loop());
        self.tasks.push(self.spawn_error_loop());
    }

    /// Stop delivering emissions. Both loops are aborted immediately;
    /// nothing pending is drained. Idempotent.
    pub fn deactivate(&mut self) {
        if !self.tasks.is_empty() {
            info!("Deactivating screen binding");
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    /// Whether the consumer loops are currently running.
    pub fn is_active(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }

    fn spawn_snapshot_loop(&self) -> JoinHandle<()> {
        let mut snapshots = self.snapshots.clone();
        let view = self.view.clone();
        let clock = self.clock.clone();
        snapshots.redeliver_latest();

        tokio::spawn(async move {
            while let Some(snapshot) = snapshots.next().await {
                // One year per snapshot, read from the clock, not the data.
                let current_year = clock.current_year();
                match shaping::select((*snapshot).clone(), &current_year) {
                    Ok(visible) => {
                        info!(
                            "Snapshot of {} movies shaped to {} visible for {}",
                            snapshot.len(),
                            visible.len(),
                            current_year
                        );
                        view.set_movies(visible);
                    }
                    Err(err) => {
                        // Not fatal: keep consuming snapshots.
                        warn!("Failed to shape snapshot: {err:#}");
                    }
                }
            }
            info!("Snapshot channel closed, ending consumer loop");
        })
    }

    fn spawn_error_loop(&self) -> JoinHandle<()> {
        let mut errors = self.errors.clone();
        let notifier = self.notifier.clone();
        errors.redeliver_latest();

        tokio::spawn(async move {
            while let Some(message) = errors.next().await {
                // Empty string is the "no error" sentinel, never shown.
                if message.is_empty() {
                    continue;
                }
                info!("Showing error notification: {message:?}");
                notifier.show_message(&message);
            }
            info!("Error channel closed, ending consumer loop");
        })
    }
}

impl Drop for ScreenBinding {
    fn drop(&mut self) {
        self.deactivate();
    }
}
