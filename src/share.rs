//! Sharing the sales summary
//!
//! A share is a notification step: the summary text is formatted from a
//! session snapshot and handed to a [`ShareTarget`]. Whatever the target
//! reports, the session itself is never touched.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ShareError;
use crate::session::SessionState;

/// Default summary template
pub const DEFAULT_SHARE_TEMPLATE: &str = "I've sold {sold} desserts for ${revenue}!";

/// Notice shown to the user when a share could not be delivered
pub const SHARE_UNAVAILABLE_NOTICE: &str = "Sharing not available";

const SOLD_PLACEHOLDER: &str = "{sold}";
const REVENUE_PLACEHOLDER: &str = "{revenue}";

/// Turns sale counters into a one-line summary.
pub trait ShareFormatter {
    fn format(&self, desserts_sold: u64, revenue: u64) -> String;
}

impl<F> ShareFormatter for F
where
    F: Fn(u64, u64) -> String,
{
    fn format(&self, desserts_sold: u64, revenue: u64) -> String {
        self(desserts_sold, revenue)
    }
}

/// Formatter filling `{sold}` and `{revenue}` in a text template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFormatter {
    template: String,
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SHARE_TEMPLATE)
    }
}

impl TemplateFormatter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// True if the template mentions both counters
    pub fn has_placeholders(template: &str) -> bool {
        template.contains(SOLD_PLACEHOLDER) && template.contains(REVENUE_PLACEHOLDER)
    }
}

impl ShareFormatter for TemplateFormatter {
    fn format(&self, desserts_sold: u64, revenue: u64) -> String {
        self.template
            .replace(SOLD_PLACEHOLDER, &desserts_sold.to_string())
            .replace(REVENUE_PLACEHOLDER, &revenue.to_string())
    }
}

/// Something that can take a summary and pass it on.
pub trait ShareTarget {
    /// Deliver `text`.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::Unavailable` if the text could not be delivered.
    fn request_share(&mut self, text: &str) -> Result<(), ShareError>;
}

/// Target used when no share mechanism is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableShare;

impl ShareTarget for UnavailableShare {
    fn request_share(&mut self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::unavailable("no share target configured"))
    }
}

/// Appends each summary as one line to a file.
#[derive(Debug, Clone)]
pub struct FileShare {
    path: PathBuf,
}

impl FileShare {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShareTarget for FileShare {
    fn request_share(&mut self, text: &str) -> Result<(), ShareError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ShareError::unavailable(format!("cannot open {}: {}", self.path.display(), e))
            })?;
        writeln!(file, "{}", text).map_err(|e| {
            ShareError::unavailable(format!("cannot write {}: {}", self.path.display(), e))
        })
    }
}

/// Keeps shared texts in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryShare {
    shared: Vec<String>,
}

impl MemoryShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> &[String] {
        &self.shared
    }
}

impl ShareTarget for MemoryShare {
    fn request_share(&mut self, text: &str) -> Result<(), ShareError> {
        self.shared.push(text.to_string());
        Ok(())
    }
}

impl<T: ShareTarget + ?Sized> ShareTarget for Box<T> {
    fn request_share(&mut self, text: &str) -> Result<(), ShareError> {
        (**self).request_share(text)
    }
}

/// Result of a share attempt, as seen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The summary was delivered
    Shared(String),
    /// The summary could not be delivered; `notice` is for the user
    Unavailable {
        text: String,
        notice: String,
        reason: String,
    },
}

impl ShareOutcome {
    /// Message suitable for a status line
    pub fn status_message(&self) -> String {
        match self {
            Self::Shared(text) => format!("Shared: {}", text),
            Self::Unavailable { notice, .. } => notice.clone(),
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}

/// Format the summary of `state` and hand it to `target`. No retry.
pub fn share_summary(
    state: &SessionState,
    formatter: &dyn ShareFormatter,
    target: &mut dyn ShareTarget,
) -> ShareOutcome {
    let text = formatter.format(state.desserts_sold, state.revenue);
    match target.request_share(&text) {
        Ok(()) => {
            info!(sold = state.desserts_sold, revenue = state.revenue, "Shared sales summary");
            ShareOutcome::Shared(text)
        }
        Err(ShareError::Unavailable(reason)) => {
            warn!(%reason, "Sharing not available");
            ShareOutcome::Unavailable {
                text,
                notice: SHARE_UNAVAILABLE_NOTICE.to_string(),
                reason,
            }
        }
    }
}
