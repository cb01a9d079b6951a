//! Transient notifications
//!
//! Toasts carry copy feedback and non-fatal load failures. They expire on
//! their own; the Tick handler sweeps them out.

use std::time::{Duration, Instant};

/// Severity of a toast, controls styling and default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A transient notification with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
    ttl: Duration,
}

impl Toast {
    const INFO_TTL: Duration = Duration::from_millis(1500);
    const ERROR_TTL: Duration = Duration::from_secs(6);

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
            created: Instant::now(),
            ttl: Self::INFO_TTL,
        }
    }

    /// Error toasts linger long enough to read an URL off them.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            created: Instant::now(),
            ttl: Self::ERROR_TTL,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.ttl
    }
}
