//! Configuration types for Abstrakt pipeline runs.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so a
//! configuration file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration: verbosity and render settings.
//! - [`RenderConfig`] - Controls the shape of the emitted DOT text.
//!
//! # Example
//!
//! ```
//! # use abstrakt::config::AppConfig;
//! let config = AppConfig::default().with_verbose(true);
//! assert!(config.verbose());
//! assert!(!config.render().strict());
//! ```

use log::Level;
use serde::Deserialize;

/// Top-level application configuration.
///
/// Verbosity lives here rather than in process-wide state: every pipeline run
/// receives the value it should use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Log every node and edge as it is added.
    #[serde(default)]
    verbose: bool,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `verbose` - Report graph construction progress at `info` level.
    /// * `render` - DOT output options.
    pub fn new(verbose: bool, render: RenderConfig) -> Self {
        Self { verbose, render }
    }

    /// Returns a copy of this configuration with verbosity overridden.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Level at which per-node and per-edge progress is logged.
    pub fn progress_level(&self) -> Level {
        if self.verbose {
            Level::Info
        } else {
            Level::Debug
        }
    }
}

/// Options for the DOT renderer.
///
/// With the defaults the output is exactly a graph header followed by one
/// statement per node and one per edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Emit `strict digraph`, letting Graphviz merge parallel edges.
    #[serde(default)]
    strict: bool,

    /// Attach a `label` attribute with the unsanitized service name to every node.
    #[serde(default)]
    node_labels: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(strict: bool, node_labels: bool) -> Self {
        Self {
            strict,
            node_labels,
        }
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn node_labels(&self) -> bool {
        self.node_labels
    }
}
