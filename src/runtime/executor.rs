//! Picker runtime executor

use super::SessionEvent;
use crate::state_machine::{transition, Effect, Event, PickerContext, PickerState, TransitionError};
use crate::submit::SubmissionSink;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};

/// Generic picker runtime that can work with any submission sink
pub struct PickerRuntime<S>
where
    S: SubmissionSink + 'static,
{
    context: PickerContext,
    state: PickerState,
    sink: Arc<S>,
    event_rx: mpsc::Receiver<Event>,
    /// Weak so that dropping every handle ends the session
    event_tx: mpsc::WeakSender<Event>,
    snapshot_tx: watch::Sender<PickerState>,
    broadcast_tx: broadcast::Sender<SessionEvent>,
}

impl<S> PickerRuntime<S>
where
    S: SubmissionSink + 'static,
{
    #[must_use]
    pub fn new(
        context: PickerContext,
        state: PickerState,
        sink: S,
        event_rx: mpsc::Receiver<Event>,
        event_tx: mpsc::WeakSender<Event>,
        snapshot_tx: watch::Sender<PickerState>,
        broadcast_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            context,
            state,
            sink: Arc::new(sink),
            event_rx,
            event_tx,
            snapshot_tx,
            broadcast_tx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(
            endpoint_configured = self.context.endpoint_configured,
            movies = self.context.catalog.movies.len(),
            "Starting picker runtime"
        );

        // Process events in a loop until every handle is gone
        while let Some(event) = self.event_rx.recv().await {
            if let Err(e) = self.process_event(event) {
                tracing::warn!(error = %e, "Rejected event");
                let _ = self.broadcast_tx.send(SessionEvent::Rejected {
                    message: e.to_string(),
                });
            }
        }

        tracing::info!("Picker runtime stopped");
    }

    fn process_event(&mut self, event: Event) -> Result<(), TransitionError> {
        let name = event.name();

        // Pure state transition
        let result = transition(&self.state, &self.context, event)?;
        if result.is_inert() {
            tracing::debug!(event = name, "Event left state unchanged");
            return Ok(());
        }

        tracing::debug!(
            event = name,
            step = ?result.new_state.step,
            status = ?result.new_state.submit_status,
            "State updated"
        );
        self.state = result.new_state;

        for effect in result.effects {
            self.execute_effect(effect);
        }
        Ok(())
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::NotifyStateChange => {
                self.snapshot_tx.send_replace(self.state.clone());
                let _ = self.broadcast_tx.send(SessionEvent::StateChange {
                    state: self.state.clone(),
                });
            }

            // Runs in the background so navigation stays live while sending
            Effect::SendSubmission { payload } => {
                let sink = Arc::clone(&self.sink);
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let outcome = match sink.submit(&payload).await {
                        Ok(()) => Event::SubmissionSucceeded,
                        Err(e) => Event::SubmissionFailed { message: e.message },
                    };
                    if let Some(tx) = event_tx.upgrade() {
                        let _ = tx.send(outcome).await;
                    } else {
                        tracing::debug!("Session ended before the submission completed");
                    }
                });
            }
        }
    }
}
