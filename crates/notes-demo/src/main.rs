use anyhow::{Context, Result};
use notes_config::StoreConfig;
use notes_store::{Action, LoggingMiddleware, Middleware, NoteState, Store};
use serde_json::json;

mod logger;

/// Build a store from config, with the logging middleware when enabled
fn build_store(config: &StoreConfig) -> Store {
    let middleware: Option<Box<dyn Middleware>> = if config.log_actions {
        Some(Box::new(LoggingMiddleware::new()))
    } else {
        None
    };
    Store::with_state(NoteState::starting_at(config.next_note_id), middleware)
}

fn main() -> Result<()> {
    logger::init()?;
    log::info!("Starting notes-demo");

    let config = StoreConfig::load();
    let store = build_store(&config);

    let handle = store.clone();
    let subscription = store.subscribe(move || {
        log::info!("Store now holds {} notes", handle.get_state().len());
    });

    let first = config.next_note_id;
    store.dispatch(Action::create_note("Test note"))?;
    store.dispatch(Action::update_note(first, "Updated"))?;
    store.dispatch(Action::create_note("Second note"))?;
    store.dispatch(Action::delete_note(first))?;
    store.dispatch(json!({ "type": "gibberish" }))?;

    // Malformed records are reported, not fatal
    if let Err(e) = store.dispatch(json!({ "content": "no type" })) {
        log::warn!("Skipped malformed action: {}", e);
    }

    subscription.unsubscribe();

    let snapshot = serde_json::to_string_pretty(&*store.get_state())
        .context("Failed to serialize state")?;
    println!("{}", snapshot);

    Ok(())
}
