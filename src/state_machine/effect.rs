//! Effects produced by state transitions

use super::state::PickerState;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Publish the new snapshot to observers
    NotifyStateChange,

    /// Send the picks to the endpoint (spawns as background task)
    SendSubmission { payload: SubmissionPayload },
}

impl Effect {
    #[must_use]
    pub fn send_submission(state: &PickerState, submitted_at: DateTime<Utc>) -> Self {
        Effect::SendSubmission {
            payload: SubmissionPayload::from_state(state, submitted_at),
        }
    }
}

/// Form body of the submission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub foods: String,
    pub drinks: String,
    pub movies: String,
    /// ISO-8601, UTC with millisecond precision
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl SubmissionPayload {
    #[must_use]
    pub fn from_state(state: &PickerState, submitted_at: DateTime<Utc>) -> Self {
        Self {
            foods: state.foods.joined(),
            drinks: state.drinks.joined(),
            movies: state.movies.joined(),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
