//! Error codes for the loader diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors (YAML syntax and shape)
//! - `E1xx` - Required field errors

use std::fmt;

/// Error codes for categorizing loader diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed YAML.
    ///
    /// The text could not be read as a YAML document at all.
    E001,

    /// Unexpected document shape.
    ///
    /// The text is valid YAML but does not have the shape of a constellation,
    /// e.g. the root is a list or `services` is a string.
    E002,

    // =========================================================================
    // Required Field Errors (E1xx)
    // =========================================================================
    /// Missing required field.
    E100,

    /// Empty required field.
    ///
    /// The field is present but its value is empty or only whitespace.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed YAML",
            ErrorCode::E002 => "unexpected document shape",
            ErrorCode::E100 => "missing required field",
            ErrorCode::E101 => "empty required field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
