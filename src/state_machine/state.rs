//! Picker state types

use crate::catalog::Catalog;
use serde::Serialize;
use std::sync::Arc;

/// Maximum number of picks per category
pub const MAX_PICK: usize = 5;

/// Declines after which the invitation turns sad
pub const SAD_THRESHOLD: u32 = 10;

/// Highest attempt number shown on the invitation badge
pub const MAX_ATTEMPT: u32 = 11;

/// Escalating pleas, indexed by decline count (clamped to the last one)
pub const PROMPTS: [&str; 11] = [
    "Will you be my Valentine?",
    "Pretty please?",
    "I brought chocolate...",
    "I'll plan everything!",
    "I'll do the dishes too",
    "I'll pick the comfiest blankets",
    "Just say yes and we'll dance",
    "You + me = perfect night",
    "I'll make you laugh",
    "One last time?",
    "Ok, I'm sad now...",
];

// ============================================================================
// Categories and Steps
// ============================================================================

/// Option category, one per planner step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Drink,
    Movie,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Drink, Category::Movie];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Eat",
            Category::Drink => "Drink",
            Category::Movie => "Movies",
        }
    }
}

/// Planner step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Eat,
    Drink,
    Movies,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Eat, Step::Drink, Step::Movies];

    /// 1-based step number
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::Eat => 1,
            Step::Drink => 2,
            Step::Movies => 3,
        }
    }

    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Step::Eat),
            2 => Some(Step::Drink),
            3 => Some(Step::Movies),
            _ => None,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// The category picked on this step
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Step::Eat => Category::Food,
            Step::Drink => Category::Drink,
            Step::Movies => Category::Movie,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.category().label()
    }
}

// ============================================================================
// Selection Set
// ============================================================================

/// Ordered, duplicate-free set of picked keys, bounded to [`MAX_PICK`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_PICK
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|k| k == key)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Remove `key` if present, otherwise append it when there is room.
    ///
    /// Returns whether the set changed. Adding to a full set is a no-op.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|k| k == key) {
            self.items.remove(pos);
            return true;
        }
        if self.is_full() {
            return false;
        }
        self.items.push(key.to_string());
        true
    }

    /// Replace the contents, keeping the first occurrence of each key up to capacity
    pub fn replace(&mut self, keys: impl IntoIterator<Item = String>) {
        self.items.clear();
        for key in keys {
            if self.is_full() {
                break;
            }
            if !self.contains(&key) {
                self.items.push(key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Comma-space joined keys, as sent to the submission endpoint
    #[must_use]
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

// ============================================================================
// Submission Status
// ============================================================================

/// Lifecycle of the outbound submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmitStatus {
    #[must_use]
    pub fn is_sending(self) -> bool {
        self == SubmitStatus::Sending
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Ready to send your plan?",
            SubmitStatus::Sending => "Sending your picks...",
            SubmitStatus::Sent => "Sent! I'll take care of the rest.",
            SubmitStatus::Error => "Couldn't send. Check the setup and try again.",
        }
    }
}

// ============================================================================
// Picker State
// ============================================================================

/// Which screen the flow is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Invitation pending
    Prompting,
    /// Invitation pending after too many declines
    Sad,
    /// Invitation accepted, picking preferences
    Planning,
}

/// Complete picker snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PickerState {
    pub accepted: bool,
    pub decline_count: u32,
    /// Only meaningful while `accepted`
    pub step: Step,
    pub foods: SelectionSet,
    pub drinks: SelectionSet,
    pub movies: SelectionSet,
    pub submit_status: SubmitStatus,
}

impl PickerState {
    #[must_use]
    pub fn selection(&self, category: Category) -> &SelectionSet {
        match category {
            Category::Food => &self.foods,
            Category::Drink => &self.drinks,
            Category::Movie => &self.movies,
        }
    }

    pub(crate) fn selection_mut(&mut self, category: Category) -> &mut SelectionSet {
        match category {
            Category::Food => &mut self.foods,
            Category::Drink => &mut self.drinks,
            Category::Movie => &mut self.movies,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.accepted {
            Phase::Planning
        } else if self.is_sad() {
            Phase::Sad
        } else {
            Phase::Prompting
        }
    }

    #[must_use]
    pub fn is_sad(&self) -> bool {
        !self.accepted && self.decline_count >= SAD_THRESHOLD
    }

    #[must_use]
    pub fn prompt_text(&self) -> &'static str {
        let index = usize::try_from(self.decline_count)
            .unwrap_or(usize::MAX)
            .min(PROMPTS.len() - 1);
        PROMPTS[index]
    }

    /// Attempt number for the invitation badge, capped at [`MAX_ATTEMPT`]
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.decline_count.saturating_add(1).min(MAX_ATTEMPT)
    }

    /// Guard for leaving `step`: its category has at least one pick
    #[must_use]
    pub fn can_proceed(&self, step: Step) -> bool {
        !self.selection(step.category()).is_empty()
    }

    /// Every step before `target` passes its guard
    #[must_use]
    pub fn can_go_to(&self, target: Step) -> bool {
        Step::ALL
            .iter()
            .take_while(|step| **step < target)
            .all(|step| self.can_proceed(*step))
    }

    /// All three categories have at least one pick
    #[must_use]
    pub fn can_submit(&self) -> bool {
        Category::ALL
            .iter()
            .all(|category| !self.selection(*category).is_empty())
    }

    #[must_use]
    pub fn status_message(&self) -> &'static str {
        self.submit_status.message()
    }
}

// ============================================================================
// Picker Context
// ============================================================================

/// Immutable per-session configuration
#[derive(Debug, Clone)]
pub struct PickerContext {
    pub catalog: Arc<Catalog>,
    /// Whether a submission endpoint address is configured
    pub endpoint_configured: bool,
}

impl PickerContext {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, endpoint_configured: bool) -> Self {
        Self {
            catalog,
            endpoint_configured,
        }
    }
}
