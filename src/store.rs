//! Single-writer state container
//!
//! Holds the current [`AppState`], routes dispatched actions through the
//! combined reducer and notifies observers synchronously after each
//! transition.

pub mod action;
pub(crate) mod reducer;
pub mod state;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use reducer::{reduce, reduce_active_thread_id, reduce_messages, reduce_threads};
pub use state::{AppState, Message, MessageId, StateError, Thread, ThreadId};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Errors returned by [`Store::dispatch`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown thread: {0}")]
    UnknownThread(ThreadId),
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&Store)>;

/// The application state container.
///
/// Not `Sync`: all dispatches happen on one thread and run to completion,
/// including any nested dispatches made by observers.
pub struct Store {
    state: RefCell<AppState>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_subscription: Cell<u64>,
}

impl Store {
    /// Create a store from an initial state.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the state breaks the thread invariants.
    pub fn new(initial: AppState) -> Result<Self, StateError> {
        initial.validate()?;
        Ok(Self::from_valid(initial))
    }

    fn from_valid(initial: AppState) -> Self {
        tracing::debug!(
            active_thread_id = %initial.active_thread_id,
            threads = initial.threads.len(),
            "Store initialized"
        );
        Self {
            state: RefCell::new(initial),
            observers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Snapshot of the current state. Cheap: collections are shared.
    pub fn get_state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Apply an action and notify observers.
    ///
    /// # Errors
    ///
    /// `OPEN_THREAD` for a thread that does not exist is rejected with
    /// [`StoreError::UnknownThread`] and leaves the state untouched. Every
    /// other action is accepted.
    #[allow(clippy::needless_pass_by_value)] // actions are handed over as they arrive off the wire
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        if let Action::OpenThread { id } = &action {
            if !self.state.borrow().has_thread(id) {
                tracing::warn!(thread_id = %id, "Rejected OPEN_THREAD for unknown thread");
                return Err(StoreError::UnknownThread(id.clone()));
            }
        }

        let next = reducer::reduce(self.get_state(), &action);
        *self.state.borrow_mut() = next;
        tracing::debug!(action = action.kind(), "Dispatched action");

        self.notify();
        Ok(())
    }

    /// Register an observer, called after every accepted dispatch
    pub fn subscribe(&self, observer: impl Fn(&Store) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(sub, _)| *sub != id);
        observers.len() != before
    }

    // Observers are snapshotted so they can subscribe, unsubscribe or
    // dispatch without holding a borrow.
    fn notify(&self) {
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(self);
        }
    }
}

impl Default for Store {
    /// Store seeded with the built-in threads
    fn default() -> Self {
        Self::from_valid(crate::seed::default_state())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish_non_exhaustive()
    }
}
