//! Fixed color palette for the UI.

use ratatui::style::Color;

/// Color roles used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Screen background.
    pub base: Color,
    /// Modal background.
    pub mantle: Color,
    /// Primary text.
    pub text: Color,
    /// De-emphasized text (hints, placeholders).
    pub subtext: Color,
    /// Field labels and borders.
    pub overlay: Color,
    /// Success notices and valid markers.
    pub green: Color,
    /// Errors.
    pub red: Color,
    /// Warnings and the uploading indicator.
    pub yellow: Color,
    /// Accents (focused field, titles).
    pub mauve: Color,
    /// Secondary accents (camera state line).
    pub blue: Color,
}

/// The fixed default palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(30, 30, 46),
        mantle: Color::Rgb(24, 24, 37),
        text: Color::Rgb(205, 214, 244),
        subtext: Color::Rgb(166, 173, 200),
        overlay: Color::Rgb(108, 112, 134),
        green: Color::Rgb(166, 227, 161),
        red: Color::Rgb(243, 139, 168),
        yellow: Color::Rgb(249, 226, 175),
        mauve: Color::Rgb(203, 166, 247),
        blue: Color::Rgb(137, 180, 250),
    }
}
