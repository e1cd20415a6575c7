//! The core diagnostic type for the loader error system.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A single loader error with optional source location information.
///
/// Diagnostics raised for YAML problems carry a label pointing into the
/// document. Diagnostics about required fields have no reliable source
/// position and carry a help text naming the expected key instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Diagnostic for a required field that is absent.
    ///
    /// `path` locates the owning object, e.g. `services[2]`; an empty path
    /// means the document root.
    pub fn missing_field(path: &str, field: &str) -> Self {
        Self::new(
            ErrorCode::E100,
            format!("missing required field `{field}`{}", in_path(path)),
        )
        .with_help(format!("add a non-empty `{field}` value"))
    }

    /// Diagnostic for a required field whose value is blank.
    pub fn empty_field(path: &str, field: &str) -> Self {
        Self::new(
            ErrorCode::E101,
            format!("required field `{field}` is empty{}", in_path(path)),
        )
        .with_help(format!("give `{field}` a non-empty value"))
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Add a label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

fn in_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" in {path}")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message"
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
