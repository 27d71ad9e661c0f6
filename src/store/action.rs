//! Actions accepted by the store

use super::state::{MessageId, ThreadId};
use serde::{Deserialize, Serialize};

/// Requested state changes, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddMessage {
        text: String,
        #[serde(rename = "threadId")]
        thread_id: ThreadId,
    },
    DeleteMessage {
        id: MessageId,
    },
    OpenThread {
        id: ThreadId,
    },
    /// Any unrecognized `type`. Every reducer treats it as identity.
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn add_message(text: impl Into<String>, thread_id: impl Into<ThreadId>) -> Self {
        Action::AddMessage {
            text: text.into(),
            thread_id: thread_id.into(),
        }
    }

    pub fn delete_message(id: impl Into<MessageId>) -> Self {
        Action::DeleteMessage { id: id.into() }
    }

    pub fn open_thread(id: impl Into<ThreadId>) -> Self {
        Action::OpenThread { id: id.into() }
    }

    /// Wire name of the action type
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddMessage { .. } => "ADD_MESSAGE",
            Action::DeleteMessage { .. } => "DELETE_MESSAGE",
            Action::OpenThread { .. } => "OPEN_THREAD",
            Action::Unknown => "UNKNOWN",
        }
    }
}
