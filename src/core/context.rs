//! Logging context for a single samplesheet run.
//!
//! Components never log through a process-wide, per-module logger of their
//! own. Each run creates a [`RunContext`] and hands it to the classifier, the
//! grouping engine and the assembler; they enter its span while working, so
//! every event carries the run's input directory and can be told apart from
//! events of other runs in the same process.

use std::path::Path;

use tracing::span::Entered;
use tracing::Span;

#[derive(Debug, Clone)]
pub struct RunContext {
    span: Span,
}

impl RunContext {
    /// Context for a run over `dir`
    #[must_use]
    pub fn for_directory(dir: &Path) -> Self {
        Self {
            span: tracing::info_span!("samplesheet", dir = %dir.display()),
        }
    }

    /// Context that attaches no span to events
    #[must_use]
    pub fn detached() -> Self {
        Self { span: Span::none() }
    }

    /// Enter the run span until the returned guard is dropped
    #[must_use]
    pub fn enter(&self) -> Entered<'_> {
        self.span.enter()
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::detached()
    }
}
