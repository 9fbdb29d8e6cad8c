//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Outer width; leaves room for the intro line inside the borders
const WIDTH: u16 = 50;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        // Help for the screen underneath, not for the overlay itself
        let shown = match mode {
            AppMode::Help => AppMode::Shop,
            other => *other,
        };
        let sections = keybinding_ctx.get_help_content(&shown);
        Self {
            content: Self::build_content(&sections),
        }
    }

    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(vec![Span::styled(
                "  Dessert Clicker Help  ",
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from("Click the dessert or press a key to sell it."),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::key()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press ? or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Number of content lines
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = (self.content.len() as u16).saturating_add(2);
        let area = centered(parent, WIDTH.min(parent.width), height.min(parent.height));

        f.render_widget(Clear, area);
        let help = Paragraph::new(self.content.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(Colors::PRIMARY)),
            );
        f.render_widget(help, area);
    }
}

fn centered(parent: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(parent);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_text(width: u16, height: u16) -> String {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Help, &ctx);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                overlay.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_intro_line_is_not_clipped() {
        let text = render_text(80, 24);
        assert!(text.contains("Click the dessert or press a key to sell it."));
        assert!(text.contains("Press ? or Esc to close"));
    }

    #[test]
    fn test_help_lists_every_shop_binding() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Help, &ctx);
        let bindings = ctx.get_bindings(&AppMode::Shop).len();
        // header (3) + per section title and blank (2 each) + footer (1)
        assert_eq!(overlay.line_count(), 3 + bindings + 2 * 2 + 1);
    }

    #[test]
    fn test_centered_fits_parent() {
        let parent = Rect::new(0, 0, 80, 24);
        let area = centered(parent, 44, 10);
        assert_eq!(area.width, 44);
        assert_eq!(area.height, 10);
        assert_eq!(area.x, 18);
        assert_eq!(area.y, 7);
    }
}
