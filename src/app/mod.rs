//! Application module
//!
//! Contains the terminal front end: event handling and the main loop.
//!
//! # Module Structure
//! - `state` - Presentation state types (AppState, AppMode, StatusNotice)
//! - Main module - App struct and event loop
//!
//! The app never reads counters from the session directly. It holds a
//! channel subscription and redraws from the latest snapshot it received.

mod state;

pub use state::{AppMode, AppState, StatusNotice};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::session::{DessertSession, SessionState};
use crate::share::{ShareFormatter, ShareOutcome, ShareTarget, share_summary};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    session: DessertSession,
    /// Snapshots published by the session
    updates: Receiver<SessionState>,
    state: AppState,
    formatter: Box<dyn ShareFormatter>,
    share_target: Box<dyn ShareTarget>,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    /// Where the dessert was drawn last frame, for mouse clicks
    dessert_area: Option<Rect>,
}

impl App {
    /// Create a new application instance around an existing session
    pub fn new(
        mut session: DessertSession,
        formatter: Box<dyn ShareFormatter>,
        share_target: Box<dyn ShareTarget>,
    ) -> Self {
        info!("Creating new App instance");
        let (_subscription, updates) = session.subscribe_channel();
        let state = AppState::new(session.current_state(), session.catalog().len());

        let mut app = Self {
            session,
            updates,
            state,
            formatter,
            share_target,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            dessert_area: None,
        };
        app.sync_snapshot();
        app
    }

    /// Presentation state as last rendered
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &DessertSession {
        &self.session
    }

    /// Pull every pending snapshot; the newest one wins
    fn sync_snapshot(&mut self) {
        while let Ok(snapshot) = self.updates.try_recv() {
            self.state.snapshot = snapshot;
        }
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.sync_snapshot();

            terminal.draw(|f| {
                let area = self.ui_renderer.render(f, &self.state, &self.keybinding_context);
                self.dessert_area = Some(area);
            })?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                let quit = match crossterm::event::read()? {
                    Event::Key(key_event) => self.handle_key_event(key_event),
                    Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                    _ => false,
                };
                if quit {
                    break;
                }
            }
        }

        info!(
            sold = self.state.snapshot.desserts_sold,
            revenue = self.state.snapshot.revenue,
            "Leaving dessert shop"
        );
        Ok(())
    }

    /// Handle keyboard input; returns true when the app should exit
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Windows terminals also report releases
        if key_event.kind == KeyEventKind::Release {
            return false;
        }

        match self
            .keybinding_context
            .resolve(&self.state.mode, key_event.code, key_event.modifiers)
        {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    /// Handle mouse input; a left click on the dessert sells it
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> bool {
        if self.state.mode != AppMode::Shop {
            return false;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            let hit = self.dessert_area.is_some_and(|area| {
                area.contains(ratatui::layout::Position::new(mouse_event.column, mouse_event.row))
            });
            if hit {
                return self.handle_action(KeyAction::Sell);
            }
        }
        false
    }

    /// Apply an action; returns true when the app should exit
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        debug!(?action, mode = ?self.state.mode, "Handling action");
        match action {
            KeyAction::Sell => {
                self.session.advance();
                self.state.status = None;
                self.sync_snapshot();
            }
            KeyAction::Share => {
                let outcome = self.share();
                self.state.status = Some(match &outcome {
                    ShareOutcome::Shared(_) => StatusNotice::success(outcome.status_message()),
                    ShareOutcome::Unavailable { .. } => {
                        StatusNotice::warning(outcome.status_message())
                    }
                });
            }
            KeyAction::Help => self.state.mode = AppMode::Help,
            KeyAction::Dismiss => self.state.mode = AppMode::Shop,
            KeyAction::Quit => return true,
        }
        false
    }

    /// Share the summary of the snapshot on screen
    fn share(&mut self) -> ShareOutcome {
        share_summary(
            &self.state.snapshot,
            self.formatter.as_ref(),
            self.share_target.as_mut(),
        )
    }

    /// Set the clickable dessert area (normally done by the renderer)
    pub fn set_dessert_area(&mut self, area: Rect) {
        self.dessert_area = Some(area);
    }
}
