// ABOUTME: HTML generation module for the slidemark application
// ABOUTME: Assembles a standalone deck page from parsed slides and their directives

use crate::errors::Result;
use crate::frontmatter::DEFAULT_THEME;
use crate::markdown::{self, Presentation};
use crate::resources::ResourceFile;
use crate::segment::Slide;
use crate::style;
use crate::utils::{self, escape_html};
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "Presentation";

/// Options for assembling a deck page
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub stylesheets: Vec<ResourceFile>,
    pub scripts: Vec<ResourceFile>,
    pub embed_resources: bool,
    /// Theme used when the document does not declare one
    pub default_theme: Option<String>,
    /// Title used when the document does not declare one
    pub default_title: Option<String>,
    pub fetch_timeout: Duration,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            embed_resources: true,
            default_theme: None,
            default_title: None,
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

/// Generate a deck page from a markdown file
pub fn generate_html(markdown_path: &Path, options: &HtmlOptions) -> Result<String> {
    info!("Generating HTML from markdown: {:?}", markdown_path);
    utils::validate_file_exists(markdown_path)?;

    let markdown_content = fs::read_to_string(markdown_path)?;
    let presentation = markdown::parse_presentation(&markdown_content)?;

    render_presentation(&presentation, options)
}

/// Assemble the full page for an already parsed presentation
pub fn render_presentation(presentation: &Presentation, options: &HtmlOptions) -> Result<String> {
    let front_matter = &presentation.front_matter;
    let title = front_matter
        .title
        .as_deref()
        .or(options.default_title.as_deref())
        .unwrap_or(DEFAULT_TITLE);
    let theme = front_matter
        .theme
        .as_deref()
        .or(options.default_theme.as_deref())
        .unwrap_or(DEFAULT_THEME);

    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html_doc.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if let Some(author) = &front_matter.author {
        html_doc.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape_html(author)
        ));
    }
    if let Some(description) = &front_matter.description {
        html_doc.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }

    push_resources(&mut html_doc, &options.stylesheets, options);

    html_doc.push_str(&format!(
        "</head>\n<body data-theme=\"{}\">\n<main class=\"deck\">\n",
        escape_html(theme)
    ));

    let total = presentation.slides.len();
    for (index, slide) in presentation.slides.iter().enumerate() {
        html_doc.push_str(&render_slide(slide, index + 1, total, front_matter.paginate));
    }

    html_doc.push_str("</main>\n");
    push_resources(&mut html_doc, &options.scripts, options);
    html_doc.push_str("</body>\n</html>");

    Ok(html_doc)
}

/// Markup for one slide: a section carrying its class, inline style,
/// header, footer and page number.
pub fn render_slide(slide: &Slide<String>, number: usize, total: usize, paginate: bool) -> String {
    let directives = &slide.directives;

    let mut classes = vec!["slide".to_string()];
    classes.extend(style::slide_classes(directives));

    let mut section = format!(
        "<section class=\"{}\" data-slide=\"{}\"",
        escape_html(&classes.join(" ")),
        number
    );
    let inline_style = style::slide_style(directives);
    if !inline_style.is_empty() {
        section.push_str(&format!(" style=\"{}\"", escape_html(&inline_style)));
    }
    section.push_str(">\n");

    if let Some(header) = style::header_text(directives) {
        section.push_str(&format!(
            "<header class=\"slide-header\">{}</header>\n",
            escape_html(&header)
        ));
    }

    for fragment in &slide.content {
        section.push_str(fragment);
    }

    if let Some(footer) = style::footer_text(directives) {
        section.push_str(&format!(
            "<footer class=\"slide-footer\">{}</footer>\n",
            escape_html(&footer)
        ));
    }
    if style::is_paginated(directives, paginate) {
        section.push_str(&format!(
            "<span class=\"slide-number\">{} / {}</span>\n",
            number, total
        ));
    }

    section.push_str("</section>\n");
    section
}

fn push_resources(html_doc: &mut String, resources: &[ResourceFile], options: &HtmlOptions) {
    for resource in resources {
        match resource.tag(options.embed_resources, options.fetch_timeout) {
            Ok(tag) => {
                html_doc.push_str(&tag);
                html_doc.push('\n');
            }
            Err(e) => {
                // Continue with the other resources rather than failing the page
                warn!("Failed to include resource {}: {}", resource.path, e);
            }
        }
    }
}

/// Write HTML content to a file, creating parent directories as needed
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);
    utils::ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, html_content)?;
    Ok(())
}
