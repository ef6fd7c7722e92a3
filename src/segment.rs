// ABOUTME: Slide segmentation for the slidemark library
// ABOUTME: Splits an ordered run of blocks into slides at every divider

use crate::cascade::Cascade;
use crate::directives::{self, DirectiveSet};
use serde::Serialize;

/// One block-level node of a document, as seen by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<T> {
    /// A horizontal rule ending the current slide.
    Divider,
    /// Raw text of an HTML comment block.
    Comment(String),
    Content(T),
}

/// A slide and the directives resolved for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide<T> {
    pub content: Vec<T>,
    pub directives: DirectiveSet,
}

/// Single forward pass over a document's blocks.
///
/// Runs without content never become slides, and directives declared in
/// such a run are discarded at the divider that ends it.
#[derive(Debug)]
pub struct SlideSplitter<T> {
    slides: Vec<Slide<T>>,
    bucket: Vec<T>,
    cascade: Cascade,
}

impl<T> Default for SlideSplitter<T> {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            bucket: Vec::new(),
            cascade: Cascade::new(),
        }
    }
}

impl<T> SlideSplitter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block<T>) {
        match block {
            Block::Divider => {
                if self.bucket.is_empty() {
                    self.cascade.discard();
                } else {
                    self.flush();
                }
            }
            Block::Comment(text) => self.cascade.apply(directives::parse_comment(&text)),
            Block::Content(node) => self.bucket.push(node),
        }
    }

    pub fn finish(mut self) -> Vec<Slide<T>> {
        if !self.bucket.is_empty() {
            self.flush();
        }
        self.slides
    }

    fn flush(&mut self) {
        let content = std::mem::take(&mut self.bucket);
        let directives = self.cascade.flush();
        self.slides.push(Slide {
            content,
            directives,
        });
    }
}

/// Split blocks into slides, resolving each slide's directives.
pub fn split_slides<T, I>(blocks: I) -> Vec<Slide<T>>
where
    I: IntoIterator<Item = Block<T>>,
{
    let mut splitter = SlideSplitter::new();
    for block in blocks {
        splitter.push(block);
    }
    splitter.finish()
}
