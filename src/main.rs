//! Line-oriented driver for the thread store
//!
//! Reads one JSON action per line on stdin and writes the derived view as
//! one JSON line on stdout after every accepted action.

use chat_threads::{seed, select_tabs, select_thread_view, Action, AppState, Config, LogFormat};
use chat_threads::{SelectorError, Store};
use serde_json::{json, Value};
use std::io::BufRead;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_logging(config.log_format);

    let initial = match &config.seed_path {
        Some(path) => seed::load(path)?,
        None => seed::default_state(),
    };
    let store = Store::new(initial)?;

    store.subscribe(|store| print_view(&store.get_state()));
    print_view(&store.get_state());

    for (line_no, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action: Action = match serde_json::from_str(&line) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "Skipping malformed action");
                continue;
            }
        };
        if let Err(e) = store.dispatch(action) {
            tracing::warn!(line = line_no + 1, error = %e, "Action rejected");
        }
    }

    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "chat_threads=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}

fn render(state: &AppState) -> Result<Value, SelectorError> {
    let tabs = select_tabs(state)?;
    let view = select_thread_view(state)?;
    Ok(json!({
        "tabs": tabs.tabs,
        "otherMessageCount": tabs.other_message_count,
        "messages": view.display_messages(),
    }))
}

fn print_view(state: &AppState) {
    match render(state) {
        Ok(view) => println!("{view}"),
        Err(e) => tracing::error!(error = %e, "Cannot render state"),
    }
}
