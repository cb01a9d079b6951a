//! homedeck-app - Application state and orchestration for homedeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `AppState` is the model, `Message` the intent vocabulary,
//! `handler::update` the transition function, and `actions::handle_action`
//! the executor for everything with side effects (catalog loads, clipboard
//! writes, opening URLs).

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod loader;
pub mod message;
pub mod signals;
pub mod state;
pub mod toast;

// Re-export primary types
pub use config::{Settings, Theme};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use loader::CatalogSource;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
pub use toast::{Toast, ToastKind};
