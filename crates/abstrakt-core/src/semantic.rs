//! Semantic constellation model types.
//!
//! This module contains the typed representation of a constellation document
//! after loading. These types are what every later stage of the pipeline
//! consumes.
//!
//! # Pipeline Position
//!
//! ```text
//! YAML Text
//!     ↓ load (abstrakt-parser)
//! Semantic Model (these types) - typed, required fields checked
//!     ↓ structure
//! Constellation Graph - identities resolved, references validated
//!     ↓ export
//! DOT Text
//! ```
//!
//! # Organization
//!
//! - [`constellation`] - [`Constellation`], [`Service`], [`Relationship`]
//! - [`value`] - Open property bags: [`Properties`], [`Value`]

pub mod constellation;
pub mod value;

pub use constellation::*;
pub use value::*;
