//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles of the clicker screen.
//!
//! # Usage
//! ```rust
//! use dessert_clicker::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let notice_style = Theme::notice_style(false);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::catalog::DessertImage;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// App bar background
    pub const BG_APP_BAR: Color = Color::Rgb(110, 60, 90);

    /// Transaction panel background
    pub const BG_PANEL: Color = Color::Rgb(40, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::LightMagenta;

    /// Secondary accent color - used for key hints
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Revenue figure
    pub const REVENUE: Color = Color::LightGreen;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::BG_APP_BAR)
            .add_modifier(Modifier::BOLD)
    }

    /// App bar filler
    pub fn app_bar() -> Style {
        Style::default().bg(Colors::BG_APP_BAR)
    }

    /// Transaction panel
    pub fn panel() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_PANEL)
    }

    /// Big counter values
    pub fn counter() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Revenue value
    pub fn revenue() -> Style {
        Style::default()
            .fg(Colors::REVENUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Key label in hints and help
    pub fn key() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for the status line notice
    pub fn notice_style(success: bool) -> Style {
        if success {
            Style::default().fg(Colors::SUCCESS)
        } else {
            Style::default()
                .fg(Colors::WARNING)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Color of the dessert art
    pub fn dessert_color(image: DessertImage) -> Color {
        match image {
            DessertImage::Cupcake | DessertImage::Marshmallow => Color::LightMagenta,
            DessertImage::Donut | DessertImage::Lollipop => Color::LightRed,
            DessertImage::Eclair | DessertImage::KitKat | DessertImage::Oreo => {
                Color::Rgb(160, 100, 60)
            }
            DessertImage::Froyo | DessertImage::IceCreamSandwich => Color::LightCyan,
            DessertImage::Gingerbread | DessertImage::Nougat => Color::Rgb(200, 130, 70),
            DessertImage::Honeycomb => Color::Yellow,
            DessertImage::JellyBean => Color::LightGreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_notice_styles_differ() {
        assert_ne!(Theme::notice_style(true), Theme::notice_style(false));
    }

    #[test]
    fn test_every_dessert_has_a_color() {
        for image in DessertImage::iter() {
            assert_ne!(Theme::dessert_color(image), Color::Reset);
        }
    }
}
