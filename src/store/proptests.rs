//! Property-based tests for the reducers and store
//!
//! These tests verify the reducer laws hold across arbitrary states.

use super::*;
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_message() -> impl Strategy<Value = Message> {
    ("[a-zA-Z0-9 ]{0,20}", "[a-z ]{1,20}").prop_map(|(text, timestamp)| {
        let mut message = Message::new(text);
        message.timestamp = timestamp;
        message
    })
}

fn arb_thread(index: usize) -> impl Strategy<Value = Thread> {
    ("[A-Z][a-z]{1,10}", proptest::collection::vec(arb_message(), 0..6)).prop_map(
        move |(title, messages)| {
            let mut thread = Thread::new(format!("{index}-thread"), title);
            thread.messages = messages.into_iter().collect();
            thread
        },
    )
}

fn arb_state() -> impl Strategy<Value = AppState> {
    (1usize..5)
        .prop_flat_map(|count| {
            let threads: Vec<_> = (0..count).map(arb_thread).collect();
            (threads, 0..count)
        })
        .prop_map(|(threads, active)| AppState {
            active_thread_id: threads[active].id.clone(),
            threads: threads.into_iter().collect(),
        })
}

/// Actions whose ids are drawn from the state where possible
fn arb_action_for(state: &AppState) -> impl Strategy<Value = Action> {
    let thread_ids: Vec<ThreadId> = state.threads.iter().map(|t| t.id.clone()).collect();
    let mut message_ids: Vec<MessageId> = state
        .threads
        .iter()
        .flat_map(|t| t.messages.iter().map(|m| m.id.clone()))
        .collect();
    message_ids.push(MessageId::from("missing"));

    prop_oneof![
        ("[a-z ]{0,10}", proptest::sample::select(thread_ids.clone()))
            .prop_map(|(text, thread_id)| Action::AddMessage { text, thread_id }),
        proptest::sample::select(message_ids).prop_map(|id| Action::DeleteMessage { id }),
        proptest::sample::select(thread_ids).prop_map(|id| Action::OpenThread { id }),
        Just(Action::Unknown),
    ]
}

fn arb_state_and_actions() -> impl Strategy<Value = (AppState, Vec<Action>)> {
    arb_state().prop_flat_map(|state| {
        let actions = proptest::collection::vec(arb_action_for(&state), 1..10);
        (Just(state), actions)
    })
}

fn message_ids(thread: &Thread) -> Vec<MessageId> {
    thread.messages.iter().map(|m| m.id.clone()).collect()
}

// ============================================================================
// Reducer Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_unknown_action_is_identity(state in arb_state()) {
        let next = reduce(state.clone(), &Action::Unknown);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_add_then_delete_round_trips(state in arb_state(), pick in any::<prop::sample::Index>(), text in "[a-z]{0,10}") {
        let target = state.threads[pick.index(state.threads.len())].id.clone();
        let after_add = reduce(state.clone(), &Action::add_message(text, target.clone()));

        let added = after_add.thread(&target).unwrap().messages.last().unwrap().id.clone();
        let after_delete = reduce(after_add, &Action::DeleteMessage { id: added });

        prop_assert_eq!(after_delete, state);
    }

    #[test]
    fn prop_add_message_touches_only_target(state in arb_state(), pick in any::<prop::sample::Index>()) {
        let target = state.threads[pick.index(state.threads.len())].id.clone();
        let next = reduce(state.clone(), &Action::add_message("hi", target.clone()));

        for (before, after) in state.threads.iter().zip(next.threads.iter()) {
            prop_assert_eq!(&before.id, &after.id);
            if before.id == target {
                prop_assert_eq!(after.messages.len(), before.messages.len() + 1);
                prop_assert_eq!(&after.messages.last().unwrap().text, "hi");
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_delete_missing_is_identity(state in arb_state()) {
        let next = reduce(state.clone(), &Action::delete_message("missing"));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_open_thread_leaves_threads(state in arb_state(), pick in any::<prop::sample::Index>()) {
        let target = state.threads[pick.index(state.threads.len())].id.clone();
        let next = reduce(state.clone(), &Action::open_thread(target.clone()));
        prop_assert_eq!(next.active_thread_id, target);
        prop_assert_eq!(next.threads, state.threads);
    }

    #[test]
    fn prop_delete_preserves_remaining_order(state in arb_state()) {
        for thread in &state.threads {
            for message in &thread.messages {
                let next = reduce(state.clone(), &Action::DeleteMessage { id: message.id.clone() });
                let expected: Vec<MessageId> = message_ids(thread)
                    .into_iter()
                    .filter(|id| id != &message.id)
                    .collect();
                prop_assert_eq!(message_ids(next.thread(&thread.id).unwrap()), expected);
            }
        }
    }
}

// ============================================================================
// Store Invariants
// ============================================================================

proptest! {
    #[test]
    fn prop_store_preserves_invariants((state, actions) in arb_state_and_actions()) {
        let store = Store::new(state.clone()).unwrap();
        let thread_order: Vec<ThreadId> = state.threads.iter().map(|t| t.id.clone()).collect();

        for action in actions {
            store.dispatch(action).unwrap();
            let current = store.get_state();

            prop_assert!(current.validate().is_ok());
            let order: Vec<ThreadId> = current.threads.iter().map(|t| t.id.clone()).collect();
            prop_assert_eq!(&order, &thread_order);

            for thread in &current.threads {
                let ids: HashSet<_> = thread.messages.iter().map(|m| &m.id).collect();
                prop_assert_eq!(ids.len(), thread.messages.len());
            }
        }
    }
}
