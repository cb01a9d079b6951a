//! Color palettes for the dark and light themes.
//!
//! Every color the widgets use lives here, resolved through [`palette()`]
//! so the runtime theme toggle swaps the whole scheme at once.

use homedeck_app::Theme;
use ratatui::style::Color;

/// A complete color scheme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,
    pub contrast_fg: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),

    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),

    accent: Color::Rgb(88, 166, 255),

    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    text_bright: Color::Rgb(240, 246, 252),
    contrast_fg: Color::Rgb(10, 12, 16),

    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(234, 238, 242),

    border_dim: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),

    accent: Color::Rgb(9, 105, 218),

    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(101, 109, 118),
    text_muted: Color::Rgb(140, 149, 159),
    text_bright: Color::Rgb(0, 0, 0),
    contrast_fg: Color::Rgb(255, 255, 255),

    status_green: Color::Rgb(26, 127, 55),
    status_red: Color::Rgb(207, 34, 46),
    status_yellow: Color::Rgb(154, 103, 0),
};

/// Resolve the palette for the active theme.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
