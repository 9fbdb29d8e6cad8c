//! User interface rendering module
//!
//! Draws the single clicker screen:
//!
//! ```text
//! +------------------------------------+
//! | Dessert Clicker          S: Share  |  app bar
//! |                                    |
//! |            [ dessert ]             |  clickable
//! |                                    |
//! | Desserts Sold                   3  |  transaction info
//! | Total Revenue                 $30  |
//! | status                             |
//! | Space Sell dessert  S Share ...    |  nav bar
//! +------------------------------------+
//! ```

mod art;

pub use art::{dessert_art, ART_HEIGHT, ART_WIDTH};

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const APP_TITLE: &str = "Dessert Clicker";

/// Renders the clicker screen
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole screen.
    ///
    /// Returns the area covered by the dessert, which is the click target.
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) -> Rect {
        let screen = f.area();
        let [app_bar, dessert, info, status, nav] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(ART_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(screen);

        self.render_app_bar(f, app_bar);
        let target = self.render_dessert(f, dessert, state);
        self.render_transaction_info(f, info, state);
        self.render_status(f, status, state);
        self.render_nav_bar(f, nav, state, keybinding_ctx);

        if state.help_visible() {
            HelpOverlay::new(&state.mode, keybinding_ctx).render(f, screen);
        }

        target
    }

    fn render_app_bar(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Block::default().style(Styles::app_bar()), area);
        f.render_widget(
            Paragraph::new(format!(" {}", APP_TITLE)).style(Styles::title()),
            area,
        );
        f.render_widget(
            Paragraph::new("S: Share ")
                .style(Styles::title())
                .alignment(Alignment::Right),
            area,
        );
    }

    /// Draw the dessert art centered in `area`; returns the bordered art box
    fn render_dessert(&self, f: &mut Frame, area: Rect, state: &AppState) -> Rect {
        let snapshot = &state.snapshot;
        let box_width = (ART_WIDTH + 4).min(area.width);
        let box_height = (ART_HEIGHT + 2).min(area.height);

        let [row] = Layout::vertical([Constraint::Length(box_height)])
            .flex(Flex::Center)
            .areas(area);
        let [target] = Layout::horizontal([Constraint::Length(box_width)])
            .flex(Flex::Center)
            .areas(row);

        let color = Theme::dessert_color(snapshot.current_image);
        let lines: Vec<Line> = dessert_art(snapshot.current_image)
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(color))))
            .collect();

        let title = format!(
            " {} ${} ",
            snapshot.current_image.display_name(),
            snapshot.current_price
        );
        let position = format!(" {}/{} ", snapshot.current_index + 1, state.catalog_len);

        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::PRIMARY))
                .title(title)
                .title_bottom(Line::from(position).right_aligned()),
        );
        f.render_widget(widget, target);
        target
    }

    fn render_transaction_info(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Colors::PRIMARY))
            .style(Styles::panel());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [sold_row, revenue_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let rows = [
            (
                sold_row,
                "Desserts Sold",
                state.snapshot.desserts_sold.to_string(),
                Styles::counter(),
            ),
            (
                revenue_row,
                "Total Revenue",
                format!("${}", state.snapshot.revenue),
                Styles::revenue(),
            ),
        ];
        for (row, label, value, value_style) in rows {
            f.render_widget(Paragraph::new(format!(" {}", label)).style(Styles::text()), row);
            f.render_widget(
                Paragraph::new(format!("{} ", value))
                    .style(value_style)
                    .alignment(Alignment::Right),
                row,
            );
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect, state: &AppState) {
        if let Some(notice) = &state.status {
            let status = Paragraph::new(format!(" {}", notice.message))
                .style(Theme::notice_style(notice.success));
            f.render_widget(status, area);
        }
    }

    fn render_nav_bar(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let mut spans = vec![Span::raw(" ")];
        for item in keybinding_ctx.get_nav_items(&state.mode) {
            spans.push(Span::styled(item.key_display, Styles::key()));
            spans.push(Span::styled(format!(" {}  ", item.action_label), Styles::nav_hint()));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::session::{DessertSession, EndPolicy};
    use crate::app::StatusNotice;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
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

    fn draw(state: &AppState) -> (Terminal<TestBackend>, Rect) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let ctx = KeybindingContext::new();
        let mut target = Rect::default();
        terminal
            .draw(|f| target = UiRenderer::new().render(f, state, &ctx))
            .unwrap();
        (terminal, target)
    }

    #[test]
    fn test_renders_counters_and_dessert() {
        let mut session = DessertSession::new(Catalog::builtin(), EndPolicy::Wrap);
        session.advance();
        session.advance();
        let state = AppState::new(session.current_state(), 5);

        let (terminal, target) = draw(&state);
        let text = screen_text(&terminal);
        assert!(text.contains("Dessert Clicker"));
        assert!(text.contains("Desserts Sold"));
        assert!(text.contains("$15"));
        assert!(text.contains("Eclair $15"));
        assert!(text.contains("3/5"));
        assert_eq!(target.width, ART_WIDTH + 4);
    }

    #[test]
    fn test_renders_status_notice() {
        let session = DessertSession::new(Catalog::builtin(), EndPolicy::Wrap);
        let mut state = AppState::new(session.current_state(), 5);
        state.status = Some(StatusNotice::warning("Sharing not available"));

        let (terminal, _) = draw(&state);
        assert!(screen_text(&terminal).contains("Sharing not available"));
    }

    #[test]
    fn test_help_overlay_drawn_in_help_mode() {
        let session = DessertSession::new(Catalog::builtin(), EndPolicy::Wrap);
        let mut state = AppState::new(session.current_state(), 5);
        state.mode = crate::app::AppMode::Help;

        let (terminal, _) = draw(&state);
        assert!(screen_text(&terminal).contains("Dessert Clicker Help"));
    }
}
