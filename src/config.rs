//! Configuration for the site header
//!
//! Handles configuration loading from environment variables and defaults,
//! and reading optional JSON site definitions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};
use crate::pages::{HOME_KEY, HOME_PATH, PageRegistry, SITE_TITLE};
use crate::resolver::DEFAULT_DOCUMENT;
use crate::types::{PageEntry, PageKey};

// =============================================================================
// Constants
// =============================================================================

/// Environment variable pointing at a JSON site definition
pub const ENV_PAGES_FILE: &str = "SITE_HEADER_PAGES";

/// Environment variable overriding the default document name
pub const ENV_DEFAULT_DOCUMENT: &str = "SITE_HEADER_DEFAULT_DOCUMENT";

// =============================================================================
// Config Struct
// =============================================================================

/// Site header configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Site definition file; `None` uses the built-in pages
    pub pages_file: Option<PathBuf>,

    /// Document name served for a directory, e.g. `index.html`
    pub default_document: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_file: None,
            default_document: DEFAULT_DOCUMENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // blank values count as unset
        if let Ok(path) = std::env::var(ENV_PAGES_FILE)
            && !path.trim().is_empty()
        {
            config.pages_file = Some(PathBuf::from(path));
        }

        if let Ok(document) = std::env::var(ENV_DEFAULT_DOCUMENT)
            && !document.trim().is_empty()
        {
            config.default_document = document;
        }

        config
    }

    /// Use an explicit site definition file, overriding the environment
    pub fn with_pages_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.pages_file = path;
        }
        self
    }

    /// Build the page registry this configuration describes
    pub fn load_registry(&self) -> Result<PageRegistry> {
        match &self.pages_file {
            Some(path) => SiteDefinition::from_file(path)?.into_registry(),
            None => Ok(PageRegistry::builtin()),
        }
    }
}

// =============================================================================
// Site Definition
// =============================================================================

/// On-disk description of a site's pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteDefinition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub home_path: Option<String>,
    pub pages: Vec<PageEntry>,
    #[serde(default)]
    pub order: Option<Vec<PageKey>>,
}

impl SiteDefinition {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading site definition");
        Self::from_json(&contents)
            .map_err(|e| CliError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| CliError::InvalidConfig(e.to_string()))
    }

    /// Validate and convert into a registry
    ///
    /// `home_path` falls back to the home entry's path, then to the
    /// built-in home path.
    pub fn into_registry(self) -> Result<PageRegistry> {
        let home_path = self.home_path.unwrap_or_else(|| {
            self.pages
                .iter()
                .find(|page| page.key == HOME_KEY)
                .map(|page| page.path.clone())
                .unwrap_or_else(|| HOME_PATH.to_string())
        });
        let title = self.title.unwrap_or_else(|| SITE_TITLE.to_string());

        PageRegistry::new(title, home_path, self.pages, self.order)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Load the global configuration
pub fn load_config() -> Config {
    Config::from_env()
}

// =============================================================================
// Tests
// =============================================================================
