// ABOUTME: Markdown adapters for the slidemark library
// ABOUTME: Maps a comrak document tree or raw markdown text onto the slide segmenter

use crate::directives;
use crate::errors::{DeckError, Result};
use crate::frontmatter::FrontMatter;
use crate::segment::{self, Block, Slide};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{format_html, parse_document, Arena, ComrakOptions};
use log::{debug, info};
use serde::Serialize;

/// A parsed document: its front matter and slides, each content node
/// rendered to its own HTML fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub front_matter: FrontMatter,
    pub slides: Vec<Slide<String>>,
}

/// Enable the extensions slide documents rely on.
pub fn configure_options(options: &mut ComrakOptions) {
    options.extension.front_matter_delimiter = Some("---".to_string());
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true; // Allow raw HTML in slides
}

/// Classify the top-level children of a document.
///
/// Comment blocks are routed to the directive engine and never appear in
/// slide content, whether or not they carry directives.
pub fn document_blocks<'a>(root: &'a AstNode<'a>) -> Vec<Block<&'a AstNode<'a>>> {
    root.children()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::ThematicBreak => Some(Block::Divider),
            NodeValue::FrontMatter(_) => None,
            NodeValue::HtmlBlock(html) if directives::is_comment(&html.literal) => {
                Some(Block::Comment(html.literal.clone()))
            }
            _ => Some(Block::Content(node)),
        })
        .collect()
}

/// Tree entry point: split a parsed document into slides of AST nodes.
///
/// The tree is taken as parsed; run text through [`prepare_source`] before
/// parsing to get the text entry point's divider and comment handling.
pub fn slides_from_tree<'a>(root: &'a AstNode<'a>) -> Vec<Slide<&'a AstNode<'a>>> {
    segment::split_slides(document_blocks(root))
}

/// Front matter of a parsed document, or the defaults when absent.
pub fn front_matter<'a>(root: &'a AstNode<'a>) -> FrontMatter {
    root.children()
        .find_map(|node| match &node.data.borrow().value {
            NodeValue::FrontMatter(block) => Some(FrontMatter::parse(block)),
            _ => None,
        })
        .unwrap_or_default()
}

/// Render one node and its descendants to HTML.
pub fn render_node<'a>(node: &'a AstNode<'a>, options: &ComrakOptions) -> Result<String> {
    let mut html = Vec::new();
    format_html(node, options, &mut html)
        .map_err(|e| DeckError::RenderError(format!("Failed to render node: {}", e)))?;
    String::from_utf8(html).map_err(|e| DeckError::RenderError(e.to_string()))
}

/// Rewrite raw slide text so comrak reads it the way slide authors write it.
///
/// Outside fenced code:
/// - a bare `---` line always divides slides, even right under a paragraph
///   line (where CommonMark would see a setext heading underline);
/// - a `<!--` line with no `-->` anywhere after it is dropped on its own,
///   instead of opening an HTML block that swallows the rest of the deck;
/// - a leading `---` block is front matter only when it holds at least one
///   top-level `key: value` line, otherwise its opening `---` is a divider.
pub fn prepare_source(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let last_close = lines.iter().rposition(|line| line.contains("-->"));
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 8);
    let mut start = 0;

    if lines.first() == Some(&"---") {
        match lines.iter().skip(1).position(|line| line.trim_end() == "---") {
            Some(offset) if FrontMatter::recognizes(&lines[1..=offset].join("\n")) => {
                start = offset + 2;
                out.extend_from_slice(&lines[..start]);
            }
            // A blank first line keeps comrak from reading front matter
            Some(_) => out.push(""),
            None => {}
        }
    }

    let mut fence: Option<(char, usize)> = None;
    for (index, &line) in lines.iter().enumerate().skip(start) {
        if let Some((fence_char, fence_len)) = fence {
            if let Some((c, len, rest)) = fence_marker(line) {
                if c == fence_char && len >= fence_len && rest.trim().is_empty() {
                    fence = None;
                }
            }
            out.push(line);
            continue;
        }
        if let Some((c, len, _)) = fence_marker(line) {
            fence = Some((c, len));
            out.push(line);
            continue;
        }

        if is_divider_line(line) && out.last().is_some_and(|prev| !prev.trim().is_empty()) {
            out.push("");
        } else if block_indent(line) < 4
            && line.trim_start().starts_with("<!--")
            && last_close.map_or(true, |close| close < index)
        {
            debug!("Dropping unclosed comment line {}", index + 1);
            out.push("");
            continue;
        }
        out.push(line);
    }

    out.join("\n")
}

fn block_indent(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn is_divider_line(line: &str) -> bool {
    block_indent(line) < 4 && line.trim() == "---"
}

/// Opening or closing code fence: marker char, run length, and the rest.
fn fence_marker(line: &str) -> Option<(char, usize, &str)> {
    if block_indent(line) >= 4 {
        return None;
    }
    let trimmed = line.trim_start();
    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    (len >= 3).then(|| (marker, len, &trimmed[len..]))
}

/// Text entry point: parse markdown and render each slide to HTML.
///
/// The text goes through [`prepare_source`] first, so a bare `---` line
/// always divides and an unclosed comment costs only its own line. A deck
/// starting with `---` keeps its first slide unless the block up to the
/// next `---` holds `key: value` metadata, in which case it is front matter.
pub fn parse_presentation(markdown: &str) -> Result<Presentation> {
    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    configure_options(&mut options);
    let source = prepare_source(markdown);
    let root = parse_document(&arena, &source, &options);

    let front_matter = front_matter(root);
    let slides = slides_from_tree(root)
        .into_iter()
        .map(|slide| {
            let content = slide
                .content
                .iter()
                .map(|&node| render_node(node, &options))
                .collect::<Result<Vec<_>>>()?;
            Ok(Slide {
                content,
                directives: slide.directives,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Parsed {} slides", slides.len());
    debug!("Front matter: {:?}", front_matter);

    Ok(Presentation {
        front_matter,
        slides,
    })
}

/// Slides of a markdown document without its front matter.
pub fn parse_slides(markdown: &str) -> Result<Vec<Slide<String>>> {
    parse_presentation(markdown).map(|presentation| presentation.slides)
}
