// ABOUTME: Directive inheritance across slide boundaries
// ABOUTME: Tracks the inherited baseline and the directives of the slide being built

use crate::directives::DirectiveSet;
use log::debug;

/// Inheritance state for one pass over a document.
///
/// Regular directives persist into every later slide until overwritten.
/// Scoped directives apply to the slide being built and are dropped from
/// the baseline handed to the next one.
#[derive(Debug, Clone, Default)]
pub struct Cascade {
    inherited: DirectiveSet,
    current: DirectiveSet,
}

impl Cascade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge directives found mid-slide into the slide being built.
    pub fn apply(&mut self, directives: DirectiveSet) {
        self.current.merge(directives);
    }

    /// Close the current slide, returning its directives and starting the
    /// next slide from the new inherited baseline.
    pub fn flush(&mut self) -> DirectiveSet {
        let snapshot = std::mem::take(&mut self.current);
        self.inherited = snapshot.without_scoped();
        self.current = self.inherited.clone();
        debug!(
            "Flushed slide with {} directives, {} inherited",
            snapshot.len(),
            self.inherited.len()
        );
        snapshot
    }

    /// Drop whatever was declared since the last flush.
    pub fn discard(&mut self) {
        self.current = self.inherited.clone();
    }

    pub fn inherited(&self) -> &DirectiveSet {
        &self.inherited
    }

    pub fn current(&self) -> &DirectiveSet {
        &self.current
    }
}
