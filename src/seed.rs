//! Initial thread sets

use crate::store::{AppState, StateError, Thread, ThreadId};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid seed state: {0}")]
    State(#[from] StateError),
}

/// The built-in seed: two empty threads, the first one active
pub fn default_state() -> AppState {
    AppState {
        active_thread_id: ThreadId::from("1-fca2"),
        threads: vec![
            Thread::new("1-fca2", "Buzz Aldrin"),
            Thread::new("2-be91", "Michael Collins"),
        ]
        .into(),
    }
}

// Seed files only name threads; messages come from ADD_MESSAGE alone.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SeedFile {
    active_thread_id: ThreadId,
    threads: Vec<SeedThread>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedThread {
    id: ThreadId,
    title: String,
}

/// Parse a JSON seed document
///
/// # Errors
///
/// Fails on malformed JSON or a seed that breaks the thread invariants.
pub fn parse(json: &str) -> Result<AppState, SeedError> {
    let seed: SeedFile = serde_json::from_str(json)?;
    let threads = seed
        .threads
        .into_iter()
        .map(|t| Thread::new(t.id, t.title));
    Ok(AppState::new(seed.active_thread_id, threads)?)
}

/// Load a JSON seed file
///
/// # Errors
///
/// Fails if the file cannot be read or does not hold a valid seed.
pub fn load(path: &Path) -> Result<AppState, SeedError> {
    let json = std::fs::read_to_string(path)?;
    let state = parse(&json)?;
    tracing::info!(
        path = %path.display(),
        threads = state.threads.len(),
        "Loaded seed file"
    );
    Ok(state)
}
