//! Error and diagnostic system for the constellation loader.
//!
//! The loader reports problems as [`Diagnostic`]s: an error code, a message,
//! optional labeled source spans and optional help text. All diagnostics
//! produced while loading one document are returned together in a
//! [`ParseError`], so a user fixing a document sees every missing field at
//! once instead of one per run.
//!
//! # Example
//!
//! ```
//! # use abstrakt_parser::error::{Diagnostic, ErrorCode};
//! # use abstrakt_parser::Span;
//!
//! let diag = Diagnostic::new(ErrorCode::E001, "malformed YAML: did not find expected key")
//!     .with_label(Span::new(42..43), "here")
//!     .with_help("check the indentation of the surrounding block");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
