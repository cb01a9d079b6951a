//! Full-screen loading view for the first catalog fetch

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::state::LoadingState;
use homedeck_app::Theme;

use crate::theme::{icons, styles};

/// Centered spinner plus a cycling status message
pub struct LoadingView<'a> {
    loading: &'a LoadingState,
    theme: Theme,
}

impl<'a> LoadingView<'a> {
    pub fn new(loading: &'a LoadingState, theme: Theme) -> Self {
        Self { loading, theme }
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let theme = self.theme;
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, 1);

        let line = Line::from(vec![
            Span::styled(
                icons::spinner_frame(self.loading.animation_frame),
                styles::accent_bold(theme),
            ),
            Span::raw(" "),
            Span::styled(self.loading.message.clone(), styles::text_secondary(theme)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(line_area, buf);
    }
}
