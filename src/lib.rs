//! Dessert Clicker Library
//!
//! Sell desserts one click at a time. The library provides the dessert
//! catalog, the session state machine that books every sale, sharing of the
//! sales summary and the terminal front end built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod headless;
pub mod session;
pub mod share;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, Dessert, DessertImage};
pub use config::ClickerConfig;
pub use error::{ClickerError, ShareError};
pub use session::{DessertSession, EndPolicy, SessionState, Subscription};
pub use share::{
    share_summary, FileShare, MemoryShare, ShareFormatter, ShareOutcome, ShareTarget,
    TemplateFormatter, UnavailableShare,
};
