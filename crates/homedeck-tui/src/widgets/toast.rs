//! Toast notification overlay
//!
//! Toasts stack above the status bar, newest at the bottom. Error toasts
//! can carry a full URL (the manual-copy fallback), so they are not
//! truncated beyond what the terminal forces.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use homedeck_app::{Theme, Toast, ToastKind};

use crate::theme::styles;

/// Widget rendering the active toasts in the bottom-right corner
pub struct ToastStack<'a> {
    toasts: &'a [Toast],
    theme: Theme,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast], theme: Theme) -> Self {
        Self { toasts, theme }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.toasts.is_empty() || area.height < 3 {
            return;
        }

        // Newest toast sits closest to the status bar.
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let row_from_bottom = 2 + i as u16;
            if row_from_bottom >= area.height {
                break;
            }

            let text = format!(" {} ", toast.message);
            let width = (text.width() as u16).min(area.width);
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(width + 1),
                y: area.y + area.height - row_from_bottom,
                width,
                height: 1,
            };

            let style = match toast.kind {
                ToastKind::Info => styles::focused_selected(self.theme),
                ToastKind::Error => styles::status_red(self.theme).add_modifier(Modifier::REVERSED),
            };

            Clear.render(toast_area, buf);
            Paragraph::new(Line::from(Span::styled(text, style))).render(toast_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(toasts: &[Toast]) -> String {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(ToastStack::new(toasts, Theme::Dark), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_toast_text_is_rendered() {
        let toasts = vec![Toast::info("Copied to clipboard")];
        let content = render_to_string(&toasts);
        assert!(content.contains("Copied to clipboard"));
    }

    #[test]
    fn test_error_toast_carries_the_url() {
        let toasts = vec![Toast::error("Copy failed — copy manually: http://x:32400")];
        let content = render_to_string(&toasts);
        assert!(content.contains("http://x:32400"));
    }

    #[test]
    fn test_multiple_toasts_stack() {
        let toasts = vec![Toast::info("first"), Toast::info("second")];
        let content = render_to_string(&toasts);
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }

    #[test]
    fn test_no_toasts_renders_nothing() {
        let content = render_to_string(&[]);
        assert!(content.trim().is_empty());
    }
}
