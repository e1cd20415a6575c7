//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a location in the constellation document.
///
/// ```text
/// error[E001]: malformed YAML: did not find expected key
///   --> constellation.yaml:4:3
///    |
///  4 |   - id: 9e1bcb3d
///    |   ^ here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
