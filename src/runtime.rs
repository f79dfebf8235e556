//! Runtime for driving a picker session
//!
//! Owns the state, applies events one at a time, and publishes every new
//! snapshot to observers.

mod executor;


pub use executor::PickerRuntime;

use crate::state_machine::{Event, PickerContext, PickerState};
use crate::submit::SubmissionSink;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch};

/// Notifications sent to session observers
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The snapshot changed
    StateChange { state: PickerState },
    /// An event was refused; the state is unchanged
    Rejected { message: String },
}

/// The runtime has stopped and no longer accepts events
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Picker session has stopped")]
pub struct SessionClosed;

/// Handle to interact with a running session
#[derive(Clone)]
pub struct PickerHandle {
    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<SessionEvent>,
    snapshot_rx: watch::Receiver<PickerState>,
}

impl PickerHandle {
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the runtime has stopped.
    pub async fn send(&self, event: Event) -> Result<(), SessionClosed> {
        self.event_tx.send(event).await.map_err(|_| SessionClosed)
    }

    /// For synchronous front ends; must not be called from async context
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the runtime has stopped.
    pub fn blocking_send(&self, event: Event) -> Result<(), SessionClosed> {
        self.event_tx.blocking_send(event).map_err(|_| SessionClosed)
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> PickerState {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver that always holds the latest snapshot
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<PickerState> {
        self.snapshot_rx.clone()
    }

    /// Every change and rejection, in order
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.broadcast_tx.subscribe()
    }
}

/// Start a session on the current tokio runtime.
///
/// The session stops once every handle has been dropped.
#[must_use]
pub fn spawn_session<S: SubmissionSink + 'static>(context: PickerContext, sink: S) -> PickerHandle {
    let (event_tx, event_rx) = mpsc::channel(32);
    let (broadcast_tx, _) = broadcast::channel(64);
    let (snapshot_tx, snapshot_rx) = watch::channel(PickerState::default());

    let runtime = PickerRuntime::new(
        context,
        PickerState::default(),
        sink,
        event_rx,
        event_tx.downgrade(),
        snapshot_tx,
        broadcast_tx.clone(),
    );
    tokio::spawn(runtime.run());

    PickerHandle {
        event_tx,
        broadcast_tx,
        snapshot_rx,
    }
}
