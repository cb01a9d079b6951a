//! Main TUI runner - entry point and event loop
//!
//! The loop drains the message channel (load completions, copy outcomes,
//! signals), draws a frame, then polls the terminal. Messages run through
//! the TEA update function; any resulting action is executed by
//! homedeck-app's action layer, which reports back on the same channel.

use tokio::sync::mpsc;

use homedeck_app::message::Message;
use homedeck_app::state::AppState;
use homedeck_app::{actions, handler, signals, Settings};
use homedeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    tracing::info!("Starting TUI");
    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    // Unified message channel: background tasks and the signal handler all
    // report here.
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Kick off the initial catalog load.
    process_message(&mut state, Message::ReloadCatalog, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (load completions, copy outcomes, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (Tick on timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, executing any
/// resulting action and chasing follow-up messages to quiescence.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            actions::handle_action(action, msg_tx.clone(), &state.settings);
        }

        msg = result.message;
    }
}
