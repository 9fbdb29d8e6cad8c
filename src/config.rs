//! Configuration file handling for the dessert clicker.
//!
//! Every field is optional; a missing file or an empty JSON object gives the
//! builtin catalog, the wrap policy and the default share template.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::{Catalog, Dessert};
use crate::session::EndPolicy;
use crate::share::{DEFAULT_SHARE_TEMPLATE, FileShare, ShareTarget, TemplateFormatter, UnavailableShare};

/// Clicker configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickerConfig {
    /// Where to go after the last dessert
    pub end_policy: EndPolicy,
    /// Share summary template with `{sold}` and `{revenue}` placeholders
    pub share_template: String,
    /// File that receives shared summaries; sharing is unavailable without it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_file: Option<PathBuf>,
    /// Custom dessert list; the builtin catalog is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desserts: Option<Vec<Dessert>>,
}

impl Default for ClickerConfig {
    fn default() -> Self {
        Self {
            end_policy: EndPolicy::default(),
            share_template: DEFAULT_SHARE_TEMPLATE.to_string(),
            share_file: None,
            desserts: None,
        }
    }
}

impl ClickerConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.share_template.trim().is_empty() {
            anyhow::bail!("Share template must not be empty");
        }
        if !TemplateFormatter::has_placeholders(&self.share_template) {
            anyhow::bail!("Share template must contain both {{sold}} and {{revenue}}");
        }

        if let Some(desserts) = &self.desserts {
            if desserts.is_empty() {
                anyhow::bail!("Dessert list must contain at least one dessert");
            }
        }

        if let Some(path) = &self.share_file {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Share file path must not be empty");
            }
        }

        Ok(())
    }

    /// Build the catalog this configuration describes
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.desserts {
            Some(desserts) => {
                Catalog::new(desserts.clone()).context("Invalid dessert list in configuration")
            }
            None => Ok(Catalog::builtin()),
        }
    }

    /// Formatter for share summaries
    pub fn formatter(&self) -> TemplateFormatter {
        let formatter = TemplateFormatter::new(self.share_template.clone());
        debug!(template = formatter.template(), "Using share template");
        formatter
    }

    /// Share target for this configuration
    pub fn share_target(&self) -> Box<dyn ShareTarget> {
        match &self.share_file {
            Some(path) => {
                let target = FileShare::new(path.clone());
                info!(path = %target.path().display(), "Sharing summaries to file");
                Box::new(target)
            }
            None => {
                debug!("No share target configured");
                Box::new(UnavailableShare)
            }
        }
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(mut self, end_policy: Option<EndPolicy>, share_file: Option<PathBuf>) -> Self {
        if let Some(policy) = end_policy {
            self.end_policy = policy;
        }
        if share_file.is_some() {
            self.share_file = share_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DessertImage;
    use tempfile::tempdir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: ClickerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClickerConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clicker.json");

        let config = ClickerConfig {
            end_policy: EndPolicy::Clamp,
            share_file: Some(dir.path().join("shares.txt")),
            desserts: Some(vec![Dessert::new(2, DessertImage::Oreo)]),
            ..ClickerConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = ClickerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_rejects_template_without_placeholders() {
        let config = ClickerConfig {
            share_template: "I sold stuff".to_string(),
            ..ClickerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{sold}"));
    }

    #[test]
    fn test_rejects_empty_dessert_list() {
        let config = ClickerConfig {
            desserts: Some(Vec::new()),
            ..ClickerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_formatter_uses_configured_template() {
        let config = ClickerConfig {
            share_template: "{sold} treats, ${revenue}".to_string(),
            ..ClickerConfig::default()
        };
        assert_eq!(config.formatter().template(), "{sold} treats, ${revenue}");
        assert_eq!(
            ClickerConfig::default().formatter().template(),
            DEFAULT_SHARE_TEMPLATE
        );
    }

    #[test]
    fn test_overrides() {
        let config = ClickerConfig::default()
            .with_overrides(Some(EndPolicy::Clamp), Some(PathBuf::from("/tmp/s.txt")));
        assert_eq!(config.end_policy, EndPolicy::Clamp);
        assert_eq!(config.share_file, Some(PathBuf::from("/tmp/s.txt")));

        let unchanged = config.clone().with_overrides(None, None);
        assert_eq!(unchanged, config);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = ClickerConfig::load_from_file("/nonexistent/clicker.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }
}
