//! In-memory message threads driven by a single action-reducing store
//!
//! Actions flow into [`Store::dispatch`], the reducers in [`store`] derive
//! the next [`AppState`], and [`selectors`] project it for display.

pub mod config;
pub mod seed;
pub mod selectors;
pub mod store;

pub use config::{Config, LogFormat};
pub use selectors::{
    merge_for_display, select_tabs, select_thread_view, DisplayMessage, Origin, SelectorError,
    Tab, TabsView, ThreadView,
};
pub use store::{Action, AppState, Message, MessageId, Store, StoreError, Thread, ThreadId};
