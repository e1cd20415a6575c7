//! Export functionality for constellation graphs.
//!
//! This module provides the [`Exporter`] trait, the final stage in the
//! Abstrakt processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! YAML Text
//!     ↓ load
//! Constellation
//!     ↓ structure
//! ConstellationGraph
//!     ↓ export (this module)
//! DOT Text
//! ```
//!
//! # Available Backends
//!
//! - [`dot`] — Graphviz DOT via [`dot::DotExporter`]

/// Graphviz DOT export backend.
pub mod dot;

use crate::structure::ConstellationGraph;

/// Abstraction for graph export backends.
pub trait Exporter {
    /// Renders a graph to the backend's text format.
    ///
    /// Exporting the same graph twice yields identical text. Exporters do not
    /// validate; every edge endpoint is already a node of `graph`.
    fn export(&self, graph: &ConstellationGraph) -> String;
}
