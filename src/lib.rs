// ABOUTME: Library module for the slidemark program.
// ABOUTME: Splits markdown into slides with inherited directives and assembles deck pages.

pub mod build;
pub mod cascade;
pub mod config;
pub mod directives;
pub mod errors;
pub mod frontmatter;
pub mod html;
pub mod markdown;
pub mod resources;
pub mod segment;
pub mod style;
pub mod utils;

// Reexport common types and functions
pub use build::{BuildConfig, build_presentations};
pub use cascade::Cascade;
pub use config::{Config, ProjectConfig};
pub use directives::{
    DirectiveKey, DirectiveKind, DirectiveName, DirectiveSet, DirectiveValue, parse_comment,
};
pub use errors::{DeckError, Result};
pub use frontmatter::FrontMatter;
pub use html::{HtmlOptions, generate_html, render_presentation, write_html_to_file};
pub use markdown::{Presentation, parse_presentation, parse_slides, slides_from_tree};
pub use resources::{ResourceFile, ResourceKind};
pub use segment::{Block, Slide, SlideSplitter, split_slides};
pub use style::slide_style;
