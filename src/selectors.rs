//! Derived views over [`AppState`] for the rendering layer

use crate::store::{AppState, Message, Thread, ThreadId};
use im::Vector;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("No thread other than the active one exists")]
    NoOtherThread,
    #[error("Active thread {0} is not in the thread collection")]
    ActiveThreadMissing(ThreadId),
}

/// One entry in the tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub title: String,
    pub id: ThreadId,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsView {
    pub tabs: Vec<Tab>,
    /// Message count of the first thread that is not active
    pub other_message_count: usize,
}

/// Which side of the conversation a displayed message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Active thread: deletable, shown with its timestamp
    Own,
    /// Other thread: read-only
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMessage<'a> {
    pub message: &'a Message,
    pub origin: Origin,
}

/// The active thread alongside the first non-active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadView<'a> {
    pub thread: &'a Thread,
    pub other_thread: &'a Thread,
}

impl<'a> ThreadView<'a> {
    pub fn display_messages(&self) -> Vec<DisplayMessage<'a>> {
        merge_for_display(&self.thread.messages, &self.other_thread.messages)
    }
}

/// Tab list in thread order, flagging the active thread.
///
/// # Errors
///
/// [`SelectorError::NoOtherThread`] when every thread is the active one.
pub fn select_tabs(state: &AppState) -> Result<TabsView, SelectorError> {
    let other = other_thread(state)?;
    let tabs = state
        .threads
        .iter()
        .map(|t| Tab {
            title: t.title.clone(),
            id: t.id.clone(),
            active: t.id == state.active_thread_id,
        })
        .collect();

    Ok(TabsView {
        tabs,
        other_message_count: other.messages.len(),
    })
}

/// # Errors
///
/// Fails if the active id resolves to no thread or there is no other thread.
pub fn select_thread_view(state: &AppState) -> Result<ThreadView<'_>, SelectorError> {
    let thread = state
        .active_thread()
        .ok_or_else(|| SelectorError::ActiveThreadMissing(state.active_thread_id.clone()))?;
    let other_thread = other_thread(state)?;
    Ok(ThreadView {
        thread,
        other_thread,
    })
}

/// Other-thread messages first, then own messages, each in list order
pub fn merge_for_display<'a>(
    own: &'a Vector<Message>,
    other: &'a Vector<Message>,
) -> Vec<DisplayMessage<'a>> {
    let mut merged = Vec::with_capacity(own.len() + other.len());
    merged.extend(other.iter().map(|message| DisplayMessage {
        message,
        origin: Origin::Other,
    }));
    merged.extend(own.iter().map(|message| DisplayMessage {
        message,
        origin: Origin::Own,
    }));
    merged
}

fn other_thread(state: &AppState) -> Result<&Thread, SelectorError> {
    state
        .threads
        .iter()
        .find(|t| t.id != state.active_thread_id)
        .ok_or(SelectorError::NoOtherThread)
}
