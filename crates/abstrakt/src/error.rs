//! Error types for Abstrakt operations.
//!
//! This module provides the main error type [`AbstraktError`] which wraps
//! every failure that can abort a pipeline run.

use std::{error::Error as StdError, io};

use thiserror::Error;

use abstrakt_parser::error::ParseError;

use crate::structure::GraphError;

/// The main error type for Abstrakt operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics so that callers can render source snippets.
#[derive(Debug, Error)]
pub enum AbstraktError {
    /// The constellation file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// Duplicate or unresolved service identifiers.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a [`crate::Packager`].
    #[error("Packaging error: {0}")]
    Package(Box<dyn StdError + Send + Sync>),
}

impl AbstraktError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
