//! Pure state transition function
//!
//! Guards that are not met leave the state untouched and produce no
//! effects. Only submission misuse is reported as an error.

use super::shuffle::pick_random;
use super::{Effect, Event, PickerContext, PickerState, Step, SubmitStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: PickerState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(state: PickerState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// True when the event changed nothing
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Pick at least one food, drink and movie before submitting")]
    SubmissionNotReady,
    #[error("A submission is already in flight")]
    SubmissionInFlight,
    #[error("Unexpected submission outcome: {0}")]
    UnexpectedOutcome(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
///
/// # Errors
///
/// Submitting an incomplete plan, submitting while a request is in flight,
/// or a submission outcome with nothing in flight.
pub fn transition(
    state: &PickerState,
    context: &PickerContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        // ============================================================
        // Invitation
        // ============================================================
        Event::Accept if !state.accepted => {
            next.accepted = true;
        }

        Event::Decline if !state.accepted => {
            next.decline_count = state.decline_count.saturating_add(1);
        }

        Event::Reset if !state.accepted => {
            next.decline_count = 0;
        }

        // ============================================================
        // Navigation (planner only)
        // ============================================================
        // Leaving a step needs its own picks and those of every earlier step
        Event::Next if state.accepted => {
            if let Some(step) = state.step.next().filter(|step| state.can_go_to(*step)) {
                next.step = step;
            }
        }

        Event::Back if state.accepted => {
            if let Some(step) = state.step.prev() {
                next.step = step;
            }
        }

        Event::Jump { target } if state.accepted && state.can_go_to(target) => {
            next.step = target;
        }

        // Selections and decline count survive the trip home
        Event::Home if state.accepted => {
            next.accepted = false;
            next.step = Step::Eat;
        }

        // ============================================================
        // Selections
        // ============================================================
        Event::Toggle { category, key } => {
            if context.catalog.contains(category, &key) {
                next.selection_mut(category).toggle(&key);
            }
        }

        Event::RandomizeMovies { count, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let titles = pick_random(&context.catalog.movie_titles(), count, &mut rng);
            next.movies.replace(titles);
        }

        Event::Clear { category } => {
            next.selection_mut(category).clear();
        }

        // ============================================================
        // Submission
        // ============================================================
        Event::Submit { .. } if state.submit_status.is_sending() => {
            return Err(TransitionError::SubmissionInFlight);
        }

        Event::Submit { .. } if !state.can_submit() => {
            return Err(TransitionError::SubmissionNotReady);
        }

        Event::Submit { submitted_at } => {
            if context.endpoint_configured {
                next.submit_status = SubmitStatus::Sending;
                effects.push(Effect::send_submission(state, submitted_at));
            } else {
                // No address to send to: fail without touching the network
                next.submit_status = SubmitStatus::Error;
            }
        }

        Event::SubmissionSucceeded if state.submit_status.is_sending() => {
            next.submit_status = SubmitStatus::Sent;
        }

        Event::SubmissionFailed { .. } if state.submit_status.is_sending() => {
            next.submit_status = SubmitStatus::Error;
        }

        Event::SubmissionSucceeded | Event::SubmissionFailed { .. } => {
            return Err(TransitionError::UnexpectedOutcome(format!(
                "no submission in flight (status {:?})",
                state.submit_status
            )));
        }

        // Guard not met, or the action is not offered in this phase
        Event::Accept
        | Event::Decline
        | Event::Reset
        | Event::Next
        | Event::Back
        | Event::Jump { .. }
        | Event::Home => {}
    }

    if next == *state {
        return Ok(TransitionResult::new(next));
    }

    Ok(TransitionResult::new(next)
        .with_effect(Effect::NotifyStateChange)
        .with_effects(effects))
}
