//! Core picker state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
pub mod event;
pub mod shuffle;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, SubmissionPayload};
pub use event::Event;
pub use state::{
    Category, Phase, PickerContext, PickerState, SelectionSet, Step, SubmitStatus, MAX_ATTEMPT,
    MAX_PICK, PROMPTS, SAD_THRESHOLD,
};
pub use transition::{transition, TransitionError, TransitionResult};
