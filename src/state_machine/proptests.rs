//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary event sequences.

use super::state::*;
use super::transition::*;
use super::*;
use crate::catalog::Catalog;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context(endpoint_configured: bool) -> PickerContext {
    PickerContext::new(Arc::new(Catalog::builtin()), endpoint_configured)
}

fn selections_are_valid(state: &PickerState) -> bool {
    Category::ALL.iter().all(|category| {
        let set = state.selection(*category);
        let unique: HashSet<&String> = set.as_slice().iter().collect();
        set.len() <= MAX_PICK && unique.len() == set.len()
    })
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Food),
        Just(Category::Drink),
        Just(Category::Movie),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Eat), Just(Step::Drink), Just(Step::Movies)]
}

/// A catalog key for the category, or occasionally something unknown
fn arb_toggle_event() -> impl Strategy<Value = Event> {
    (arb_category(), 0usize..16).prop_map(|(category, index)| {
        let catalog = Catalog::builtin();
        let key = catalog
            .keys(category)
            .get(index)
            .map_or_else(|| "Not on the menu".to_string(), |k| (*k).to_string());
        Event::Toggle { category, key }
    })
}

fn arb_submit_event() -> impl Strategy<Value = Event> {
    (0i64..2_000_000_000).prop_map(|secs| Event::Submit {
        submitted_at: Utc.timestamp_opt(secs, 0).unwrap(),
    })
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Accept),
        Just(Event::Decline),
        Just(Event::Reset),
        Just(Event::Next),
        Just(Event::Back),
        arb_step().prop_map(|target| Event::Jump { target }),
        Just(Event::Home),
        arb_toggle_event(),
        (0usize..8, any::<u64>()).prop_map(|(count, seed)| Event::RandomizeMovies { count, seed }),
        arb_category().prop_map(|category| Event::Clear { category }),
        arb_submit_event(),
        Just(Event::SubmissionSucceeded),
        "[a-z ]{1,20}".prop_map(|message| Event::SubmissionFailed { message }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: selection sets stay bounded and duplicate-free
    #[test]
    fn prop_selections_bounded_and_unique(
        events in proptest::collection::vec(arb_event(), 0..60),
        configured in any::<bool>()
    ) {
        let ctx = test_context(configured);
        let mut state = PickerState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                state = result.new_state;
                prop_assert!(selections_are_valid(&state), "Invalid selections: {:?}", state);
            }
        }
    }

    // Invariant 2: toggles alone never exceed capacity
    #[test]
    fn prop_toggle_sequences_respect_capacity(
        events in proptest::collection::vec(arb_toggle_event(), 0..100)
    ) {
        let ctx = test_context(true);
        let mut state = PickerState::default();
        for event in events {
            state = transition(&state, &ctx, event).unwrap().new_state;
            prop_assert!(selections_are_valid(&state));
        }
    }

    // Invariant 3: every step change lands on a reachable step
    #[test]
    fn prop_step_changes_respect_guards(
        events in proptest::collection::vec(arb_event(), 0..60)
    ) {
        let ctx = test_context(true);
        let mut state = PickerState::default();
        for event in events {
            let is_back = matches!(event, Event::Back | Event::Home);
            if let Ok(result) = transition(&state, &ctx, event) {
                let new_state = result.new_state;
                if new_state.step != state.step && !is_back {
                    prop_assert!(
                        state.can_go_to(new_state.step),
                        "Moved from {:?} to {:?} without meeting guards",
                        state.step,
                        new_state.step
                    );
                }
                state = new_state;
            }
        }
    }

    // Invariant 4: decline count only drops through Reset
    #[test]
    fn prop_decline_count_monotonic(
        events in proptest::collection::vec(arb_event(), 0..60)
    ) {
        let ctx = test_context(true);
        let mut state = PickerState::default();
        for event in events {
            let is_reset = matches!(event, Event::Reset);
            if let Ok(result) = transition(&state, &ctx, event) {
                if !is_reset {
                    prop_assert!(result.new_state.decline_count >= state.decline_count);
                }
                state = result.new_state;
            }
        }
    }

    // Invariant 5: a submission is only sent with all three categories picked
    #[test]
    fn prop_submission_requires_picks(
        events in proptest::collection::vec(arb_event(), 0..60)
    ) {
        let ctx = test_context(true);
        let mut state = PickerState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                let sends = result
                    .effects
                    .iter()
                    .any(|e| matches!(e, Effect::SendSubmission { .. }));
                if sends {
                    prop_assert!(state.can_submit());
                    prop_assert_eq!(result.new_state.submit_status, SubmitStatus::Sending);
                }
                state = result.new_state;
            }
        }
    }

    // Invariant 6: unchanged state means no effects, changed state is announced
    #[test]
    fn prop_effects_match_state_change(
        events in proptest::collection::vec(arb_event(), 0..40)
    ) {
        let ctx = test_context(true);
        let mut state = PickerState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                if result.new_state == state {
                    prop_assert!(result.effects.is_empty());
                } else {
                    prop_assert_eq!(result.effects.first(), Some(&Effect::NotifyStateChange));
                }
                state = result.new_state;
            }
        }
    }

    // Invariant 7: rejected events never happen outside submission handling
    #[test]
    fn prop_only_submission_events_error(
        events in proptest::collection::vec(arb_event(), 0..40)
    ) {
        let ctx = test_context(false);
        let mut state = PickerState::default();
        for event in events {
            let is_submission = matches!(
                event,
                Event::Submit { .. } | Event::SubmissionSucceeded | Event::SubmissionFailed { .. }
            );
            match transition(&state, &ctx, event) {
                Ok(result) => state = result.new_state,
                Err(e) => prop_assert!(is_submission, "Unexpected error: {}", e),
            }
        }
    }

    // Invariant 8: without an endpoint the status never reaches sending
    #[test]
    fn prop_unconfigured_never_sends(
        events in proptest::collection::vec(arb_event(), 0..60)
    ) {
        let ctx = test_context(false);
        let mut state = PickerState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                prop_assert_ne!(result.new_state.submit_status, SubmitStatus::Sending);
                let sends = result
                    .effects
                    .iter()
                    .any(|e| matches!(e, Effect::SendSubmission { .. }));
                prop_assert!(!sends);
                state = result.new_state;
            }
        }
    }

    // Home returns to the invitation but keeps everything else
    #[test]
    fn prop_home_preserves_picks(
        events in proptest::collection::vec(arb_event(), 0..40)
    ) {
        let ctx = test_context(true);
        let mut state = PickerState::default();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event) {
                state = result.new_state;
            }
        }
        if state.accepted {
            let home = transition(&state, &ctx, Event::Home).unwrap().new_state;
            prop_assert!(!home.accepted);
            prop_assert_eq!(home.step, Step::Eat);
            prop_assert_eq!(home.decline_count, state.decline_count);
            prop_assert_eq!(&home.foods, &state.foods);
            prop_assert_eq!(&home.drinks, &state.drinks);
            prop_assert_eq!(&home.movies, &state.movies);
            prop_assert_eq!(home.submit_status, state.submit_status);
        }
    }
}
