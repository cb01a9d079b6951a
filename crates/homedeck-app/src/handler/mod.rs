//! Handler module - TEA update function and key routing
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Start a catalog load; `seq` ties the eventual completion message
    /// back to this request so stale completions can be discarded.
    LoadCatalog { seq: u64 },

    /// Copy a URL to the clipboard on a blocking task
    CopyToClipboard { url: String },

    /// Open a URL with the platform opener (fire-and-forget)
    OpenExternal { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
