//! Single-flight refresh coordination
//!
//! At most one credential refresh is in flight per gate. The first request
//! that hits a 401 becomes the *leader* and performs the refresh; every
//! request that fails authorization while the refresh is running enqueues as
//! a *waiter* and suspends until the leader settles the gate. Waiters are
//! released in arrival order, each observing the same outcome.
//!
//! The gate is an explicit object owned by the client instance (never a
//! module-level global), so independent clients cannot interfere with each
//! other's refresh state.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::debug;

/// Result of a settled refresh, delivered to the leader and every waiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Refresh succeeded; replay the original request with this access token.
    Refreshed(String),

    /// Refresh failed; queued requests must fail as unauthenticated.
    Failed,
}

/// Role handed to a request entering the refresh protocol.
#[derive(Debug)]
pub enum RefreshTicket {
    /// No refresh was running: the caller must perform the refresh and then
    /// [`settle`](RefreshGate::settle) the gate, success or failure.
    Leader,

    /// A refresh is already in flight: await the receiver for its outcome.
    Waiter(oneshot::Receiver<RefreshOutcome>),
}

#[derive(Default)]
struct GateState {
    refreshing: bool,
    waiters: VecDeque<oneshot::Sender<RefreshOutcome>>,
}

/// Single-flight coalescing state for credential refresh.
///
/// The check-and-set in [`acquire`](Self::acquire) happens inside one
/// critical section, so exactly one caller observes `Leader` per refresh
/// cycle regardless of how many tasks race into the protocol.
#[derive(Default)]
pub struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    /// Create a gate with no refresh in flight and no waiters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the refresh protocol.
    ///
    /// Returns [`RefreshTicket::Leader`] and marks the gate as refreshing if
    /// no refresh was running; otherwise enqueues the caller and returns a
    /// [`RefreshTicket::Waiter`].
    pub fn acquire(&self) -> RefreshTicket {
        let mut state = self.state.lock();
        if state.refreshing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push_back(tx);
            debug!(waiting = state.waiters.len(), "refresh in flight, request queued");
            RefreshTicket::Waiter(rx)
        } else {
            state.refreshing = true;
            RefreshTicket::Leader
        }
    }

    /// Settle the in-flight refresh and release all waiters in arrival order.
    ///
    /// The leader must call this exactly once per acquired leadership, on
    /// success and on failure alike; afterwards the gate is empty and a later
    /// 401 can start a fresh cycle. Waiters whose callers have gone away are
    /// skipped silently.
    pub fn settle(&self, outcome: &RefreshOutcome) {
        let waiters = {
            let mut state = self.state.lock();
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };
        debug!(released = waiters.len(), "refresh settled");
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }

    /// Whether a refresh is currently in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state.lock().refreshing
    }

    /// Number of requests currently queued behind the in-flight refresh.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.state.lock().waiters.len()
    }
}
