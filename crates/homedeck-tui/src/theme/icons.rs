//! Shared glyph constants.
//!
//! Tab category glyphs live on `TabIcon` in homedeck-core; this module
//! carries the UI-only glyphs and the spinner animation frames.

/// Braille spinner frames, indexed by animation frame.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Fallback glyph for services without an `icon` field.
pub const SERVICE_FALLBACK: &str = "▪";

/// Shown next to a URL that was just copied.
pub const COPIED: &str = "✓";

/// Shown in the status bar while a reload is in flight.
pub const RELOADING: &str = "⟳";

/// Shown when the last reload failed but the old catalog is still up.
pub const WARNING: &str = "⚠";

/// Spinner frame for a given animation tick.
pub fn spinner_frame(animation_frame: u64) -> &'static str {
    SPINNER_FRAMES[(animation_frame as usize) % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(SPINNER_FRAMES.len() as u64), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(u64::MAX), spinner_frame(u64::MAX));
    }
}
