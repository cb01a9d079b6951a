//! Action execution - background tasks spawned after update()
//!
//! The update function stays pure; everything that touches the outside
//! world (the catalog resource, the clipboard, the browser) runs here and
//! reports back through the message channel.

use std::io::Write;
use std::process::Command;
use std::time::Duration;

use tokio::sync::mpsc;

use homedeck_core::prelude::*;

use crate::clipboard;
use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::loader::{self, CatalogSource};
use crate::message::Message;

/// Execute an action produced by `handler::update`.
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, settings: &Settings) {
    match action {
        UpdateAction::LoadCatalog { seq } => {
            let source = CatalogSource::parse(&settings.catalog.source);
            let timeout = Duration::from_secs(settings.catalog.timeout_secs.max(1));
            tokio::spawn(async move {
                let message = match loader::load(&source, timeout).await {
                    Ok(catalog) => Message::CatalogLoaded { seq, catalog },
                    Err(e) => {
                        warn!("Catalog load {seq} failed: {e}");
                        Message::CatalogLoadFailed {
                            seq,
                            error: e.to_string(),
                        }
                    }
                };
                if msg_tx.send(message).await.is_err() {
                    warn!("Message channel closed before load {seq} completion was delivered");
                }
            });
        }

        UpdateAction::CopyToClipboard { url } => {
            let osc52_fallback = settings.behavior.osc52_fallback;
            let bell_on_copy = settings.behavior.bell_on_copy;
            tokio::spawn(async move {
                // arboard can block on the window system; keep it off the
                // async workers.
                let url_for_copy = url.clone();
                let outcome =
                    tokio::task::spawn_blocking(move || clipboard::copy(&url_for_copy, osc52_fallback))
                        .await;

                let message = match outcome {
                    Ok(Ok(())) => {
                        if bell_on_copy {
                            ring_bell();
                        }
                        Message::CopyCompleted { url }
                    }
                    Ok(Err(e)) => Message::CopyFailed {
                        url,
                        error: e.to_string(),
                    },
                    Err(e) => Message::CopyFailed {
                        url,
                        error: format!("copy task failed: {e}"),
                    },
                };
                let _ = msg_tx.send(message).await;
            });
        }

        UpdateAction::OpenExternal { url } => {
            // Fire-and-forget: the platform call may fail or be blocked and
            // we do not interpret that outcome.
            if let Err(e) = open_external(&url) {
                warn!("Failed to open {url}: {e}");
            }
        }
    }
}

/// Open a URL with the platform-default opener (cross-platform,
/// fire-and-forget).
pub fn open_external(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no URL opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

/// Terminal bell, the closest a TUI gets to haptic feedback.
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
