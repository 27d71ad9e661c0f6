//! Pure reducers
//!
//! Each reducer owns one slice of [`AppState`] and returns it unchanged for
//! actions it does not handle, so all of them can see every action.

use super::action::Action;
use super::state::{AppState, Message, Thread, ThreadId};
use im::Vector;

/// Combined reducer: `activeThreadId` and `threads` are reduced independently
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        active_thread_id: reduce_active_thread_id(state.active_thread_id, action),
        threads: reduce_threads(state.threads, action),
    }
}

/// Reduce a single thread's message list
pub fn reduce_messages(mut messages: Vector<Message>, action: &Action) -> Vector<Message> {
    match action {
        Action::AddMessage { text, .. } => {
            messages.push_back(Message::new(text.as_str()));
            messages
        }
        Action::DeleteMessage { id } => {
            messages.retain(|m| &m.id != id);
            messages
        }
        Action::OpenThread { .. } | Action::Unknown => messages,
    }
}

/// Reduce the thread collection, replacing at most one thread
pub fn reduce_threads(mut threads: Vector<Thread>, action: &Action) -> Vector<Thread> {
    let Some(index) = find_target_thread(&threads, action) else {
        return threads;
    };

    let thread = &mut threads[index];
    thread.messages = reduce_messages(thread.messages.clone(), action);
    threads
}

/// Reduce the active thread id. Membership is checked by the store, not here.
pub fn reduce_active_thread_id(id: ThreadId, action: &Action) -> ThreadId {
    match action {
        Action::OpenThread { id: next } => next.clone(),
        Action::AddMessage { .. } | Action::DeleteMessage { .. } | Action::Unknown => id,
    }
}

/// Index of the thread a message-level action applies to.
///
/// For deletes the first thread holding the message wins.
fn find_target_thread(threads: &Vector<Thread>, action: &Action) -> Option<usize> {
    match action {
        Action::AddMessage { thread_id, .. } => {
            let index = threads.iter().position(|t| &t.id == thread_id);
            if index.is_none() {
                tracing::trace!(thread_id = %thread_id, "No thread to add message to");
            }
            index
        }
        Action::DeleteMessage { id } => {
            let index = threads.iter().position(|t| t.contains_message(id));
            if index.is_none() {
                tracing::trace!(message_id = %id, "No thread holds message");
            }
            index
        }
        Action::OpenThread { .. } | Action::Unknown => None,
    }
}
