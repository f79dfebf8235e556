//! Events that can occur in a picker session

use super::state::{Category, Step, MAX_PICK};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Events that trigger state transitions
///
/// Inputs that would make the transition impure (randomness, the clock)
/// travel inside the event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Invitation events
    Accept,
    Decline,
    Reset,

    // Navigation events
    Next,
    Back,
    Jump {
        target: Step,
    },
    Home,

    // Selection events
    Toggle {
        category: Category,
        key: String,
    },
    RandomizeMovies {
        count: usize,
        /// Seed for the shuffle
        seed: u64,
    },
    Clear {
        category: Category,
    },

    // Submission events
    Submit {
        submitted_at: DateTime<Utc>,
    },
    SubmissionSucceeded,
    SubmissionFailed {
        message: String,
    },
}

impl Event {
    #[must_use]
    pub fn toggle(category: Category, key: impl Into<String>) -> Self {
        Event::Toggle {
            category,
            key: key.into(),
        }
    }

    /// Randomize a full movie selection with a fresh seed
    #[must_use]
    pub fn randomize_movies() -> Self {
        Event::RandomizeMovies {
            count: MAX_PICK,
            seed: rand::thread_rng().gen(),
        }
    }

    #[must_use]
    pub fn submit_now() -> Self {
        Event::Submit {
            submitted_at: Utc::now(),
        }
    }

    /// Short name for logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::Accept => "accept",
            Event::Decline => "decline",
            Event::Reset => "reset",
            Event::Next => "next",
            Event::Back => "back",
            Event::Jump { .. } => "jump",
            Event::Home => "home",
            Event::Toggle { .. } => "toggle",
            Event::RandomizeMovies { .. } => "randomize_movies",
            Event::Clear { .. } => "clear",
            Event::Submit { .. } => "submit",
            Event::SubmissionSucceeded => "submission_succeeded",
            Event::SubmissionFailed { .. } => "submission_failed",
        }
    }
}
