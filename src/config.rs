// ABOUTME: Configuration module for the slidemark application
// ABOUTME: Reads environment settings and the per-project slidemark.config.json

use crate::errors::{DeckError, Result};
use crate::html::HtmlOptions;
use crate::resources::ResourceFile;
use log::info;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PROJECT_CONFIG_FILE: &str = "slidemark.config.json";

/// Process-wide settings
pub struct Config {
    /// Theme used when a document does not name one
    pub theme: Option<String>,
    pub embed_resources: bool,
    pub fetch_timeout_secs: u64,
    pub default_css: Option<String>,
    pub default_js: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            embed_resources: true,
            fetch_timeout_secs: 10,
            default_css: None,
            default_js: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let theme = env::var("SLIDEMARK_THEME").ok().filter(|s| !s.is_empty());
        let embed_resources = env::var("SLIDEMARK_EMBED_RESOURCES")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(defaults.embed_resources);
        let fetch_timeout_secs = env::var("SLIDEMARK_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.fetch_timeout_secs);
        let default_css = env::var("SLIDEMARK_DEFAULT_CSS").ok().filter(|s| !s.is_empty());
        let default_js = env::var("SLIDEMARK_DEFAULT_JS").ok().filter(|s| !s.is_empty());

        Self {
            theme,
            embed_resources,
            fetch_timeout_secs,
            default_css,
            default_js,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Get page options with defaults from this config. Empty resource lists
    /// fall back to the configured default stylesheet and script.
    pub fn get_html_options(
        &self,
        stylesheets: Vec<ResourceFile>,
        scripts: Vec<ResourceFile>,
        embed_resources: Option<bool>,
    ) -> HtmlOptions {
        HtmlOptions {
            stylesheets: if stylesheets.is_empty() {
                self.default_stylesheets()
            } else {
                stylesheets
            },
            scripts: if scripts.is_empty() {
                self.default_scripts()
            } else {
                scripts
            },
            embed_resources: embed_resources.unwrap_or(self.embed_resources),
            default_theme: self.theme.clone(),
            default_title: None,
            fetch_timeout: self.fetch_timeout(),
        }
    }

    /// Stylesheets to use when none are given explicitly
    pub fn default_stylesheets(&self) -> Vec<ResourceFile> {
        self.default_css
            .iter()
            .map(|path| ResourceFile::stylesheet(path))
            .collect()
    }

    /// Scripts to use when none are given explicitly
    pub fn default_scripts(&self) -> Vec<ResourceFile> {
        self.default_js
            .iter()
            .map(|path| ResourceFile::script(path))
            .collect()
    }
}

/// Settings for a presentations project, read from `slidemark.config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    pub theme: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub presentations: PathBuf,
    pub output: PathBuf,
    pub custom_styles: Option<PathBuf>,
    pub custom_scripts: Option<PathBuf>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            theme: None,
            title: None,
            author: None,
            presentations: PathBuf::from("./presentations"),
            output: PathBuf::from("./dist"),
            custom_styles: None,
            custom_scripts: None,
        }
    }
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading project configuration: {:?}", path);
        if !path.exists() {
            return Err(DeckError::PathNotFoundError(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            DeckError::ConfigError(format!("Invalid project config {:?}: {}", path, e))
        })
    }

    /// Resolve a project-relative path against the directory holding the config.
    pub fn resolve(&self, root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path.strip_prefix(".").unwrap_or(path))
        }
    }

    /// Custom stylesheet and script that exist on disk, resolved against `root`.
    pub fn custom_resources(&self, root: &Path) -> (Vec<ResourceFile>, Vec<ResourceFile>) {
        let existing = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| self.resolve(root, p))
                .filter(|p| p.is_file())
                .map(|p| p.to_string_lossy().to_string())
        };

        let css = existing(&self.custom_styles)
            .map(|p| ResourceFile::stylesheet(&p))
            .into_iter()
            .collect();
        let js = existing(&self.custom_scripts)
            .map(|p| ResourceFile::script(&p))
            .into_iter()
            .collect();
        (css, js)
    }
}
