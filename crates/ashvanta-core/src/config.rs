//! Header configuration
//!
//! Loaded from `header.toml` (or `.json`) under the user config directory.
//! Every field has a default, so a partial or missing file still works.

use crate::error::CoreError;
use crate::normalize::{StoreHosts, PLATFORM_HOST};
use crate::scroll::{ScrollThresholds, HIDE_THRESHOLD, TOP_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunables for the storefront header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Offset below which the header is "at top"
    pub top_threshold: f64,

    /// Offset past which scrolling down hides the header
    pub hide_threshold: f64,

    /// Hosts treated as internal when normalizing menu URLs
    pub store_hosts: Vec<String>,

    /// Results route used by search submit
    pub search_path: String,

    /// Query parameter carrying the search term
    pub search_param: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            top_threshold: TOP_THRESHOLD,
            hide_threshold: HIDE_THRESHOLD,
            store_hosts: vec![PLATFORM_HOST.to_string()],
            search_path: "/products".to_string(),
            search_param: "q".to_string(),
        }
    }
}

impl HeaderConfig {
    /// `<config_dir>/ashvanta/header.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ashvanta").join("header.toml"))
    }

    /// Load and validate a config file. JSON when the extension is `.json`,
    /// TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| CoreError::ConfigJsonParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            })?
        } else {
            toml::from_str(&content).map_err(|e| CoreError::ConfigTomlParse {
                path: path.to_path_buf(),
                message: e.message().to_string(),
                source: e,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load, falling back to defaults on any error (graceful degradation)
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::FileRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "No header config, using defaults");
                Self::default()
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Invalid header config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.thresholds()?;

        if !self.search_path.starts_with('/') {
            return Err(CoreError::InvalidConfig {
                message: format!("search_path must start with '/' (got {:?})", self.search_path),
            });
        }
        if self.search_param.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "search_param must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Result<ScrollThresholds, CoreError> {
        ScrollThresholds::new(self.top_threshold, self.hide_threshold)
    }

    pub fn store_hosts(&self) -> StoreHosts {
        StoreHosts::new(&self.store_hosts)
    }
}
