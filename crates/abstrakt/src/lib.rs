//! Abstrakt - Turn constellation documents into graph descriptions.
//!
//! A constellation is a set of services and the directed relationships between
//! them. This crate loads a constellation from YAML, checks that every
//! identifier is unique and every relationship resolves, and renders the result
//! as Graphviz DOT text.

pub mod config;
pub mod export;
pub mod structure;

mod error;
mod package;

pub use abstrakt_core::{identifier, semantic};

pub use error::AbstraktError;
pub use package::{PackageError, Packager};

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, dot::DotExporter};
use semantic::Constellation;
use structure::ConstellationGraph;

/// Builder for loading, validating and rendering constellations.
///
/// Every method is a pure function of its arguments and the configuration the
/// builder was created with.
///
/// # Examples
///
/// ```rust
/// use abstrakt::{ConstellationBuilder, config::AppConfig};
///
/// let source = r#"
/// name: Azure Event Hubs Sample
/// id: d6e4a5e9
/// services:
///   - id: 9e1bcb3d
///     name: Event Generator
/// relationships:
///   - from: 9e1bcb3d
///     to: 9e1bcb3d
/// "#;
///
/// let builder = ConstellationBuilder::new(AppConfig::default());
///
/// // Step by step
/// let constellation = builder.load(source).expect("Failed to load");
/// let graph = builder.build_graph(&constellation).expect("Failed to build graph");
/// let dot = builder.render_dot(&graph);
///
/// // Or all at once
/// assert_eq!(builder.render(source).expect("Failed to render"), dot);
/// ```
#[derive(Debug, Default)]
pub struct ConstellationBuilder {
    config: AppConfig,
}

impl ConstellationBuilder {
    /// Create a new constellation builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Verbosity and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load source text into a constellation.
    ///
    /// No referential checks happen here; see [`Self::build_graph`].
    ///
    /// # Errors
    ///
    /// Returns [`AbstraktError::Parse`] when the text is not a well-formed
    /// constellation document.
    pub fn load(&self, source: &str) -> Result<Constellation, AbstraktError> {
        info!(bytes = source.len(); "Loading constellation");

        let constellation = abstrakt_parser::load(source)
            .map_err(|err| AbstraktError::new_parse_error(err, source))?;

        debug!(name = constellation.name(); "Constellation loaded successfully");
        trace!(constellation:?; "Loaded constellation");

        Ok(constellation)
    }

    /// Build the abstract graph of a constellation.
    ///
    /// # Errors
    ///
    /// Returns [`AbstraktError::Graph`] for duplicate service identifiers or
    /// relationships that reference unknown services.
    pub fn build_graph(
        &self,
        constellation: &Constellation,
    ) -> Result<ConstellationGraph, AbstraktError> {
        info!(
            services = constellation.services().len(),
            relationships = constellation.relationships().len();
            "Building constellation graph"
        );
        let graph = structure::build(constellation, self.config.progress_level())?;
        Ok(graph)
    }

    /// Render a graph as DOT text.
    pub fn render_dot(&self, graph: &ConstellationGraph) -> String {
        let exporter = DotExporter::new(*self.config.render());
        let dot = exporter.export(graph);
        info!(graph = graph.name(), bytes = dot.len(); "DOT rendered successfully");
        dot
    }

    /// Load, validate and render in one go.
    ///
    /// Stops at the first failing stage; nothing is rendered for an invalid
    /// constellation.
    ///
    /// # Errors
    ///
    /// Any error of [`Self::load`] or [`Self::build_graph`].
    pub fn render(&self, source: &str) -> Result<String, AbstraktError> {
        let constellation = self.load(source)?;
        let graph = self.build_graph(&constellation)?;
        Ok(self.render_dot(&graph))
    }

    /// Load and validate a constellation, then hand it to `packager`.
    ///
    /// The packager only ever sees constellations whose graph builds.
    ///
    /// # Errors
    ///
    /// Any error of [`Self::load`] or [`Self::build_graph`], or
    /// [`AbstraktError::Package`] if the packager fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use abstrakt::{ConstellationBuilder, PackageError, Packager, semantic::Constellation};
    ///
    /// struct ServiceCount;
    ///
    /// impl Packager for ServiceCount {
    ///     type Artifact = usize;
    ///
    ///     fn package(&mut self, constellation: &Constellation) -> Result<usize, PackageError> {
    ///         Ok(constellation.services().len())
    ///     }
    /// }
    ///
    /// let source = "name: Empty\nid: e\n";
    /// let count = ConstellationBuilder::default()
    ///     .package_with(source, &mut ServiceCount)
    ///     .expect("Failed to package");
    /// assert_eq!(count, 0);
    /// ```
    pub fn package_with<P: Packager>(
        &self,
        source: &str,
        packager: &mut P,
    ) -> Result<P::Artifact, AbstraktError> {
        let constellation = self.load(source)?;
        self.build_graph(&constellation)?;

        info!(name = constellation.name(); "Packaging constellation");
        packager
            .package(&constellation)
            .map_err(AbstraktError::Package)
    }
}

/// Render constellation source text as DOT.
///
/// Shorthand for [`ConstellationBuilder::render`].
///
/// # Errors
///
/// Returns an [`AbstraktError`] if the text fails to load or the graph fails to
/// build.
///
/// # Examples
///
/// ```rust
/// use abstrakt::{config::AppConfig, render_constellation};
///
/// let dot = render_constellation("name: Empty\nid: e\n", &AppConfig::default())
///     .expect("Failed to render");
/// assert!(dot.contains("Empty"));
/// ```
pub fn render_constellation(source: &str, config: &AppConfig) -> Result<String, AbstraktError> {
    ConstellationBuilder::new(config.clone()).render(source)
}
