//! Collector for accumulating diagnostics while elaborating a document.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so a single load reports every problem it finds.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// Returns `Err(ParseError)` with every recorded diagnostic, or `Ok(())`
    /// if nothing was emitted.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}
