//! Application state definitions
//!
//! Contains the presentation-side state: which screen is showing, the last
//! session snapshot received from the session and the status line.

use crate::session::SessionState;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// The dessert shop, where clicks sell desserts
    Shop,
    /// Help overlay on top of the shop
    Help,
}

/// One-line message shown under the transaction panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub message: String,
    /// Positive feedback (true) or a warning (false)
    pub success: bool,
}

impl StatusNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Latest snapshot published by the session
    pub snapshot: SessionState,
    /// Number of desserts in the catalog
    pub catalog_len: usize,
    /// Status message for user feedback
    pub status: Option<StatusNotice>,
}

impl AppState {
    pub fn new(snapshot: SessionState, catalog_len: usize) -> Self {
        Self {
            mode: AppMode::Shop,
            snapshot,
            catalog_len,
            status: None,
        }
    }

    /// Whether the help overlay is showing
    pub fn help_visible(&self) -> bool {
        self.mode == AppMode::Help
    }
}
