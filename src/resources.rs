// ABOUTME: Resource handling for the slidemark application
// ABOUTME: Loads custom stylesheets and scripts from disk or over HTTP for deck pages

use crate::errors::{DeckError, Result};
use log::info;
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;

const FETCH_ATTEMPTS: u32 = 3;

/// How a resource is included in a deck page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Stylesheet,
    Script,
}

/// A stylesheet or script referenced by a deck, local or remote.
#[derive(Debug, Clone)]
pub struct ResourceFile {
    pub path: String,
    pub kind: ResourceKind,
    pub is_remote: bool,
}

impl ResourceFile {
    pub fn new(path: &str, kind: ResourceKind) -> Self {
        let is_remote = path.starts_with("http://") || path.starts_with("https://");
        Self {
            path: path.to_string(),
            kind,
            is_remote,
        }
    }

    pub fn stylesheet(path: &str) -> Self {
        Self::new(path, ResourceKind::Stylesheet)
    }

    pub fn script(path: &str) -> Self {
        Self::new(path, ResourceKind::Script)
    }

    /// Read the resource, fetching it when remote.
    pub fn content(&self, timeout: Duration) -> Result<String> {
        if self.is_remote {
            self.fetch_remote_content(timeout)
        } else {
            self.read_local_content()
        }
    }

    fn fetch_remote_content(&self, timeout: Duration) -> Result<String> {
        info!("Fetching remote resource: {}", self.path);

        let client = Client::builder().timeout(timeout).build()?;

        let mut retry_delay = Duration::from_millis(500);
        let mut last_error = None;

        for attempt in 1..=FETCH_ATTEMPTS {
            match client.get(&self.path).send() {
                Ok(response) if response.status().is_success() => {
                    return response.text().map_err(DeckError::FetchError);
                }
                Ok(response) => {
                    last_error = Some(DeckError::ValidationError(format!(
                        "HTTP error: {}",
                        response.status()
                    )));
                }
                Err(e) => last_error = Some(DeckError::FetchError(e)),
            }

            if attempt < FETCH_ATTEMPTS {
                info!(
                    "Fetch attempt {} failed, retrying in {} ms",
                    attempt,
                    retry_delay.as_millis()
                );
                std::thread::sleep(retry_delay);
                retry_delay *= 2;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DeckError::ValidationError("Unknown error fetching resource".to_string())
        }))
    }

    fn read_local_content(&self) -> Result<String> {
        info!("Reading local resource: {}", self.path);
        let path = Path::new(&self.path);
        if !path.exists() {
            return Err(DeckError::PathNotFoundError(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(DeckError::InvalidResourcePath(self.path.clone()));
        }

        Ok(fs::read_to_string(path)?)
    }

    /// HTML tag for the resource. Remote resources are always linked;
    /// local ones are inlined when `embed` is set.
    pub fn tag(&self, embed: bool, timeout: Duration) -> Result<String> {
        if self.is_remote || !embed {
            return Ok(match self.kind {
                ResourceKind::Stylesheet => {
                    format!(r#"<link rel="stylesheet" href="{}">"#, self.path)
                }
                ResourceKind::Script => format!(r#"<script src="{}"></script>"#, self.path),
            });
        }

        let content = self.content(timeout)?;
        Ok(match self.kind {
            ResourceKind::Stylesheet => format!("<style>{}</style>", content),
            ResourceKind::Script => format!("<script>{}</script>", content),
        })
    }
}
