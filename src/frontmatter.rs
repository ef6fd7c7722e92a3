// ABOUTME: Document-level metadata for presentations
// ABOUTME: Reads the leading front matter block into presentation defaults

use crate::directives::{self, DirectiveValue};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_THEME: &str = "default";

/// Metadata declared once per document. It seeds renderer defaults and is
/// never merged into slide directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub theme: Option<String>,
    pub paginate: bool,
    pub size: Option<String>,
    pub math: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, DirectiveValue>,
}

impl FrontMatter {
    /// Parse a front matter block, delimiters included. Only flat
    /// `key: value` lines are read; indented (nested YAML) lines are ignored.
    pub fn parse(block: &str) -> Self {
        let mut front_matter = Self::default();
        for (key, value) in top_level_pairs(block) {
            front_matter.set(key, value);
        }
        front_matter
    }

    /// Whether a leading `---` block holds any metadata at all.
    pub fn recognizes(block: &str) -> bool {
        top_level_pairs(block).next().is_some()
    }

    /// The declared theme, or the built-in default.
    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    fn set(&mut self, key: &str, value: DirectiveValue) {
        let text = value.to_string();
        match key {
            "title" => self.title = Some(text),
            "description" => self.description = Some(text),
            "author" => self.author = Some(text),
            "theme" => self.theme = Some(text),
            "size" => self.size = Some(text),
            "math" => self.math = Some(text),
            "paginate" => match value.as_bool() {
                Some(paginate) => self.paginate = paginate,
                None => {
                    self.extra.insert(key.to_string(), value);
                }
            },
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}

fn top_level_pairs(block: &str) -> impl Iterator<Item = (&str, DirectiveValue)> + '_ {
    block
        .split('\n')
        .filter(|line| !line.starts_with(char::is_whitespace))
        .flat_map(directives::scan_lines)
}
