// ABOUTME: Batch rendering of a presentations project
// ABOUTME: Turns every markdown document in a directory into a deck page

use crate::config::{Config, ProjectConfig};
use crate::errors::{DeckError, Result};
use crate::html::{self, HtmlOptions};
use crate::utils;
use log::info;
use std::path::{Path, PathBuf};

const PRESENTATION_PATTERNS: [&str; 2] = ["*.md", "*.mdx"];

/// Configuration for a project build
pub struct BuildConfig {
    pub presentations_dir: PathBuf,
    pub output_dir: PathBuf,
    pub html: HtmlOptions,
}

impl BuildConfig {
    /// Combine a project config found under `root` with process settings.
    /// Project values win over environment defaults.
    pub fn from_project(project: &ProjectConfig, root: &Path, app_config: &Config) -> Self {
        let (stylesheets, scripts) = project.custom_resources(root);
        let mut html = app_config.get_html_options(stylesheets, scripts, None);
        if project.theme.is_some() {
            html.default_theme = project.theme.clone();
        }
        html.default_title = project.title.clone();

        Self {
            presentations_dir: project.resolve(root, &project.presentations),
            output_dir: project.resolve(root, &project.output),
            html,
        }
    }
}

/// Markdown documents in `dir`, sorted by path
pub fn find_presentations(dir: &Path) -> Result<Vec<PathBuf>> {
    utils::validate_directory_exists(dir)?;

    let mut paths = Vec::new();
    for pattern in PRESENTATION_PATTERNS {
        let glob_pattern = format!("{}/{}", dir.to_string_lossy(), pattern);
        paths.extend(glob::glob(&glob_pattern)?.flatten());
    }
    paths.sort();

    if paths.is_empty() {
        return Err(DeckError::NoPresentationsFoundError(format!(
            "{}/{{{}}}",
            dir.to_string_lossy(),
            PRESENTATION_PATTERNS.join(",")
        )));
    }
    Ok(paths)
}

/// Render every presentation, returning the pages written
pub fn build_presentations(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    info!("Building presentations in {:?}", config.presentations_dir);

    let sources = find_presentations(&config.presentations_dir)?;
    utils::ensure_directory_exists(&config.output_dir)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| DeckError::ValidationError(format!("No file name: {:?}", source)))?;
        let output = config.output_dir.join(format!("{}.html", stem));

        let page = html::generate_html(&source, &config.html)?;
        html::write_html_to_file(&page, &output)?;
        info!("Built {:?} -> {:?}", source, output);
        written.push(output);
    }

    Ok(written)
}
