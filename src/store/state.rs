//! Thread and message state types

use chrono::{Datelike, Local, NaiveDateTime};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Opaque message identifier, unique within its thread
    MessageId
);

string_id!(
    /// Opaque thread identifier, unique within the thread collection
    ThreadId
);

/// A single message. Never edited after creation.
///
/// Only `ADD_MESSAGE` creates messages, so ids and timestamps cannot be
/// supplied from outside the crate:
///
/// ```compile_fail
/// let message = chat_threads::Message::new("hi");
/// ```
///
/// ```compile_fail
/// use chat_threads::{Message, MessageId};
///
/// let message = Message {
///     id: MessageId::new("dup"),
///     text: "hi".to_string(),
///     timestamp: "now".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub(crate) id: MessageId,
    pub(crate) text: String,
    pub(crate) timestamp: String,
}

impl Message {
    /// Create a message with a fresh id, stamped with the current local time
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            id: MessageId(Uuid::new_v4().to_string()),
            text: text.into(),
            timestamp: format_timestamp(Local::now().naive_local()),
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// A named conversation.
///
/// Messages are read-only outside the crate:
///
/// ```compile_fail
/// let mut thread = chat_threads::Thread::new("a", "A");
/// thread.messages.clear();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub(crate) messages: Vector<Message>,
}

impl Thread {
    pub fn new(id: impl Into<ThreadId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            messages: Vector::new(),
        }
    }

    pub fn messages(&self) -> &Vector<Message> {
        &self.messages
    }

    pub fn contains_message(&self, id: &MessageId) -> bool {
        self.messages.iter().any(|m| &m.id == id)
    }
}

/// Errors raised when a state would break its structural invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State must contain at least one thread")]
    NoThreads,
    #[error("Duplicate thread id: {0}")]
    DuplicateThread(ThreadId),
    #[error("Active thread {0} is not in the thread collection")]
    DanglingActiveThread(ThreadId),
}

/// Whole application state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub active_thread_id: ThreadId,
    pub threads: Vector<Thread>,
}

impl AppState {
    /// Build a state, checking that thread ids are unique and the active id resolves
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] for an empty thread set, a duplicate thread
    /// id, or an active id that names no thread.
    pub fn new(
        active_thread_id: impl Into<ThreadId>,
        threads: impl IntoIterator<Item = Thread>,
    ) -> Result<Self, StateError> {
        let state = Self {
            active_thread_id: active_thread_id.into(),
            threads: threads.into_iter().collect(),
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the thread invariants
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] found: no threads, a duplicate
    /// thread id, or a dangling active id.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.threads.is_empty() {
            return Err(StateError::NoThreads);
        }

        let mut seen = HashSet::new();
        for thread in &self.threads {
            if !seen.insert(&thread.id) {
                return Err(StateError::DuplicateThread(thread.id.clone()));
            }
        }

        if !seen.contains(&self.active_thread_id) {
            return Err(StateError::DanglingActiveThread(
                self.active_thread_id.clone(),
            ));
        }
        Ok(())
    }

    pub fn thread(&self, id: &ThreadId) -> Option<&Thread> {
        self.threads.iter().find(|t| &t.id == id)
    }

    pub fn active_thread(&self) -> Option<&Thread> {
        self.thread(&self.active_thread_id)
    }

    pub fn has_thread(&self, id: &ThreadId) -> bool {
        self.thread(id).is_some()
    }
}

/// Human-readable timestamp, e.g. `October 16th 2026, 3:04:05 pm`
pub fn format_timestamp(at: NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{} {day}{} {}",
        at.format("%B"),
        ordinal_suffix(day),
        at.format("%Y, %-I:%M:%S %P")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
