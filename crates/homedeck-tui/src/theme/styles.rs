//! Semantic style builders, resolved against the active theme.

use homedeck_app::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::palette;

// --- Text styles ---
pub fn text_primary(theme: Theme) -> Style {
    Style::default().fg(palette(theme).text_primary)
}

pub fn text_secondary(theme: Theme) -> Style {
    Style::default().fg(palette(theme).text_secondary)
}

pub fn text_muted(theme: Theme) -> Style {
    Style::default().fg(palette(theme).text_muted)
}

pub fn text_bright(theme: Theme) -> Style {
    Style::default().fg(palette(theme).text_bright)
}

// --- Border styles ---
pub fn border_inactive(theme: Theme) -> Style {
    Style::default().fg(palette(theme).border_dim)
}

pub fn border_active(theme: Theme) -> Style {
    Style::default().fg(palette(theme).border_active)
}

// --- Accent styles ---
pub fn accent(theme: Theme) -> Style {
    Style::default().fg(palette(theme).accent)
}

pub fn accent_bold(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).accent)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green(theme: Theme) -> Style {
    Style::default().fg(palette(theme).status_green)
}

pub fn status_red(theme: Theme) -> Style {
    Style::default().fg(palette(theme).status_red)
}

pub fn status_yellow(theme: Theme) -> Style {
    Style::default().fg(palette(theme).status_yellow)
}

// --- Selection styles ---

/// Contrast-on-accent, used for the selected row and active tab.
pub fn focused_selected(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).contrast_fg)
        .bg(palette(theme).accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(theme: Theme, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(theme)
        } else {
            border_inactive(theme)
        })
}

pub fn modal_block(theme: Theme, title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive(theme))
        .style(Style::default().bg(palette(theme).popup_bg))
}
