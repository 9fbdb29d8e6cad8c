//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Sell the dessert on offer
    Sell,
    /// Share the sales summary
    Share,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        let key_matches = match (self.key, key) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        // Shift is implied by upper-case characters
        key_matches && self.modifiers == (modifiers - KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Shop,
            vec![
                Keybinding::new(KeyCode::Char(' '), KeyAction::Sell, "Space", "Sell dessert"),
                Keybinding::new(KeyCode::Enter, KeyAction::Sell, "Enter", "Sell dessert"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::Share, "S", "Share summary"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Help,
            vec![
                Keybinding::new(KeyCode::Char('?'), KeyAction::Dismiss, "?", "Close help"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
            ],
        );
    }

    /// All bindings active in `mode`, mode-specific first
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        self.mode_bindings
            .get(mode)
            .into_iter()
            .flatten()
            .chain(self.global_bindings.iter())
            .collect()
    }

    /// Resolve a key press to an action
    pub fn resolve(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Compact hints for the navigation bar
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let priority_actions = match mode {
            AppMode::Shop => vec![
                KeyAction::Sell,
                KeyAction::Share,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Help => vec![KeyAction::Dismiss, KeyAction::Quit],
        };

        let bindings = self.get_bindings(mode);
        priority_actions
            .into_iter()
            .filter_map(|action| bindings.iter().find(|b| b.action == action))
            .map(|binding| NavBarItem {
                key_display: binding.display.clone(),
                action_label: binding.description.clone(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let section = |title: &str, filter: fn(KeyAction) -> bool| {
            let items: Vec<(String, String)> = self
                .get_bindings(mode)
                .into_iter()
                .filter(|b| filter(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            (!items.is_empty()).then(|| HelpSection {
                title: title.to_string(),
                items,
            })
        };

        [
            section("Shop", |a| matches!(a, KeyAction::Sell | KeyAction::Share)),
            section("General", |a| {
                matches!(a, KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit)
            }),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_enter_sell() {
        let ctx = KeybindingContext::new();
        for key in [KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(
                ctx.resolve(&AppMode::Shop, key, KeyModifiers::NONE),
                Some(KeyAction::Sell)
            );
        }
    }

    #[test]
    fn test_uppercase_share() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(&AppMode::Shop, KeyCode::Char('S'), KeyModifiers::SHIFT),
            Some(KeyAction::Share)
        );
    }

    #[test]
    fn test_help_mode_does_not_sell() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(&AppMode::Help, KeyCode::Char(' '), KeyModifiers::NONE),
            None
        );
        assert_eq!(
            ctx.resolve(&AppMode::Help, KeyCode::Esc, KeyModifiers::NONE),
            Some(KeyAction::Dismiss)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        for mode in [AppMode::Shop, AppMode::Help] {
            assert_eq!(
                ctx.resolve(&mode, KeyCode::Char('c'), KeyModifiers::CONTROL),
                Some(KeyAction::Quit)
            );
        }
    }

    #[test]
    fn test_plain_c_does_nothing() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(&AppMode::Shop, KeyCode::Char('c'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_nav_items_for_shop() {
        let ctx = KeybindingContext::new();
        let labels: Vec<String> = ctx
            .get_nav_items(&AppMode::Shop)
            .into_iter()
            .map(|i| i.action_label)
            .collect();
        assert_eq!(labels, vec!["Sell dessert", "Share summary", "Help", "Quit"]);
    }

    #[test]
    fn test_help_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Shop);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Shop");
        assert_eq!(sections[0].items.len(), 3);
    }
}
