//! The abstract constellation graph.
//!
//! [`ConstellationGraph`] is the sole bridge between the builder and the
//! exporters. It stores nodes and edges in plain vectors so iteration order is
//! exactly insertion order; no lookup table is ever iterated.

// =============================================================================
// Name sanitization
// =============================================================================

/// Replace every space with an underscore.
///
/// Graph-description formats reject unescaped spaces in identifiers. No other
/// character is altered.
///
/// # Examples
///
/// ```
/// use abstrakt::structure::sanitize;
///
/// assert_eq!(sanitize("Azure Event Hubs Sample"), "Azure_Event_Hubs_Sample");
/// assert_eq!(sanitize("already_clean"), "already_clean");
/// ```
pub fn sanitize(name: &str) -> String {
    name.replace(' ', "_")
}

// =============================================================================
// Graph primitives
// =============================================================================

/// A node of the graph, one per service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    label: String,
    display_name: String,
}

impl GraphNode {
    /// Sanitized node label, unique per service id but not necessarily per graph.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The service name as written in the document.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// A directed edge, one per relationship, referencing two node labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    source: String,
    target: String,
}

impl GraphEdge {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

// =============================================================================
// Constellation graph
// =============================================================================

/// Directed graph of a constellation.
///
/// Self-loops and parallel edges are allowed. The graph is only constructed by
/// [`crate::structure::build`], which guarantees every edge endpoint is the
/// label of a node in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstellationGraph {
    name: String,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl ConstellationGraph {
    /// Sanitized graph name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nodes in service declaration order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in relationship declaration order.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if a node with the given label exists in the graph.
    pub fn contains_node(&self, label: &str) -> bool {
        self.nodes.iter().any(|node| node.label == label)
    }

    /// Creates an empty graph. `name` must already be sanitized.
    pub(super) fn new(name: String) -> Self {
        Self {
            name,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Appends a node.
    pub(super) fn add_node(&mut self, label: String, display_name: String) {
        self.nodes.push(GraphNode {
            label,
            display_name,
        });
    }

    /// Appends a directed edge between two existing nodes.
    ///
    /// # Panics
    /// Panics in debug mode if either endpoint is not a node label. The builder
    /// resolves endpoints before calling this; the check is compiled out of
    /// release builds.
    pub(super) fn add_edge(&mut self, source: String, target: String) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.contains_node(&source),
                "Adding edge: Source node {source} does not exist",
            );
            assert!(
                self.contains_node(&target),
                "Adding edge: Target node {target} does not exist",
            );
        }

        self.edges.push(GraphEdge { source, target });
    }
}
