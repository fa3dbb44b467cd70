//! Refresh sequencing for timer-driven refetches
//!
//! The dashboard refetches raw records on a timer and re-runs the
//! pipeline without cancelling a refresh already in flight. Without
//! sequencing, whichever response resolves last would win, even if it
//! was requested first. A [`RefreshSequencer`] closes that hazard: every
//! refresh draws a monotonic token before fetching, and a snapshot is
//! published only if its token is still the most recently issued one.
//! Consumers always read the latest published immutable snapshot.

use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::pipeline::Snapshot;

/// Token identifying one refresh cycle
pub type RefreshToken = u64;

/// Publishes pipeline snapshots in issue order, discarding stale ones
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: AtomicU64,
    latest: Mutex<Option<(RefreshToken, Arc<Snapshot>)>>,
}

impl RefreshSequencer {
    /// Create a sequencer with nothing published
    pub fn new() -> Self {
        Default::default()
    }

    /// Draw the token for a new refresh cycle.
    ///
    /// Issuing a token supersedes every earlier outstanding cycle.
    pub fn begin(&self) -> RefreshToken {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a snapshot for the given cycle.
    ///
    /// Returns `true` if the snapshot was installed, `false` if a newer
    /// cycle had already been issued and the snapshot was discarded.
    pub fn publish(&self, token: RefreshToken, snapshot: Snapshot) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());

        if token != self.issued.load(Ordering::SeqCst) {
            debug!("discarding superseded refresh {}", token);
            return false;
        }
        if let Some((published, _)) = &*latest {
            if *published >= token {
                return false;
            }
        }

        *latest = Some((token, Arc::new(snapshot)));
        true
    }

    /// The most recently published snapshot, if any
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        latest.as_ref().map(|(_, snapshot)| Arc::clone(snapshot))
    }
}
