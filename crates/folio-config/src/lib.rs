//! Configuration management for folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `[site]` URL values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Example
//!
//! ```toml
//! [theme]
//! variant = "foundation"
//! thumb_width = 120
//! thumb_height = 90
//!
//! [theme.class_substitutions]
//! widget = "widget panel"
//!
//! [site]
//! root_url = "${FOLIO_ROOT_URL:-/}"
//! ```

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Largest accepted thumbnail dimension in pixels.
const MAX_THUMB_SIZE: u32 = 2000;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override theme variant.
    pub variant: Option<ThemeVariant>,
    /// Override thumbnail width.
    pub thumb_width: Option<u32>,
    /// Override thumbnail height.
    pub thumb_height: Option<u32>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Site URLs as parsed from TOML (derived defaults not yet applied).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Which built-in theme to render with.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Base blog markup.
    #[default]
    Blog,
    /// Blog markup restyled for the Zurb Foundation CSS framework.
    Foundation,
}

/// Theme construction options.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in theme to use.
    pub variant: ThemeVariant,
    /// Gallery thumbnail width in pixels.
    pub thumb_width: u32,
    /// Gallery thumbnail height in pixels.
    pub thumb_height: u32,
    /// Extra class substitutions, layered over the theme's own.
    pub class_substitutions: BTreeMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            variant: ThemeVariant::default(),
            thumb_width: 100,
            thumb_height: 100,
            class_substitutions: BTreeMap::new(),
        }
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteConfigRaw {
    root_url: Option<String>,
    admin_url: Option<String>,
    authors_url: Option<String>,
    archives_url: Option<String>,
}

/// Resolved site URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root URL of the site.
    pub root_url: String,
    /// URL of the administration area.
    pub admin_url: String,
    /// URL under which author pages live (`{authors_url}{name}/`).
    pub authors_url: String,
    /// URL of the archives page (`{archives_url}{year}/`).
    pub archives_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::with_root("/")
    }
}

impl SiteConfig {
    /// Site URLs derived from a root URL.
    #[must_use]
    pub fn with_root(root_url: &str) -> Self {
        Self {
            root_url: root_url.to_owned(),
            admin_url: format!("{root_url}processwire/"),
            authors_url: format!("{root_url}authors/"),
            archives_url: format!("{root_url}archives/"),
        }
    }

    /// Validate that all URLs are set and name a directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any URL is empty or lacks a trailing slash.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_dir_url(&self.root_url, "site.root_url")?;
        require_dir_url(&self.admin_url, "site.admin_url")?;
        require_dir_url(&self.authors_url, "site.authors_url")?;
        require_dir_url(&self.archives_url, "site.archives_url")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.root_url`").
        field: String,
        /// Error message (e.g., "${`FOLIO_ROOT_URL`} not set").
        message: String,
    },
}

/// Require a URL to be non-empty and end with `/`.
fn require_dir_url(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if !value.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must end with '/'"
        )));
    }
    Ok(())
}

/// Require a thumbnail dimension within `1..=MAX_THUMB_SIZE`.
fn require_thumb_size(value: u32, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    if value > MAX_THUMB_SIZE {
        return Err(ConfigError::Validation(format!(
            "{field} cannot exceed {MAX_THUMB_SIZE}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_site();
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(variant) = settings.variant {
            self.theme.variant = variant;
        }
        if let Some(width) = settings.thumb_width {
            self.theme.thumb_width = width;
        }
        if let Some(height) = settings.thumb_height {
            self.theme.thumb_height = height;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_thumb_size(self.theme.thumb_width, "theme.thumb_width")?;
        require_thumb_size(self.theme.thumb_height, "theme.thumb_height")?;
        self.site_resolved.validate()
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Expand environment variable references in site URLs.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let site = &mut self.site;
        for (value, field) in [
            (&mut site.root_url, "site.root_url"),
            (&mut site.admin_url, "site.admin_url"),
            (&mut site.authors_url, "site.authors_url"),
            (&mut site.archives_url, "site.archives_url"),
        ] {
            if let Some(raw) = value.as_deref() {
                *value = Some(expand::expand_env(raw, field)?);
            }
        }
        Ok(())
    }

    /// Fill in site URLs that were not configured from the root URL.
    fn resolve_site(&mut self) {
        let root = self.site.root_url.as_deref().unwrap_or("/");
        let defaults = SiteConfig::with_root(root);

        self.site_resolved = SiteConfig {
            admin_url: self.site.admin_url.clone().unwrap_or(defaults.admin_url),
            authors_url: self.site.authors_url.clone().unwrap_or(defaults.authors_url),
            archives_url: self
                .site
                .archives_url
                .clone()
                .unwrap_or(defaults.archives_url),
            root_url: defaults.root_url,
        };
    }
}
