//! Graphviz DOT export.

use dot_structures::{Attribute, Edge, EdgeTy, Graph, Id, Node, NodeId, Stmt, Vertex};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::trace;

use crate::{config::RenderConfig, structure::ConstellationGraph};

use super::Exporter;

/// Words DOT reserves, compared case-insensitively.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Emits a directed DOT graph: one node statement per service and one edge
/// statement per relationship, both in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotExporter {
    config: RenderConfig,
}

impl DotExporter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Converts the graph into a DOT syntax tree.
    pub fn to_dot_graph(&self, graph: &ConstellationGraph) -> Graph {
        let mut stmts = Vec::with_capacity(graph.node_count() + graph.edge_count());

        for node in graph.nodes() {
            let attributes = if self.config.node_labels() {
                vec![Attribute(
                    Id::Plain("label".to_string()),
                    quoted(node.display_name()),
                )]
            } else {
                Vec::new()
            };
            stmts.push(Stmt::Node(Node {
                id: node_id(node.label()),
                attributes,
            }));
        }

        for edge in graph.edges() {
            stmts.push(Stmt::Edge(Edge {
                ty: EdgeTy::Pair(
                    Vertex::N(node_id(edge.source())),
                    Vertex::N(node_id(edge.target())),
                ),
                attributes: Vec::new(),
            }));
        }

        Graph::DiGraph {
            id: dot_id(graph.name()),
            strict: self.config.strict(),
            stmts,
        }
    }
}

impl Exporter for DotExporter {
    fn export(&self, graph: &ConstellationGraph) -> String {
        let dot = self.to_dot_graph(graph);
        trace!(dot:?; "DOT syntax tree");
        dot.print(&mut PrinterContext::default())
    }
}

fn node_id(label: &str) -> NodeId {
    NodeId(dot_id(label), None)
}

/// Plain identifier when DOT accepts it bare, quoted string otherwise.
fn dot_id(text: &str) -> Id {
    if is_plain_identifier(text) {
        Id::Plain(text.to_string())
    } else {
        quoted(text)
    }
}

fn quoted(text: &str) -> Id {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('"');
    Id::Escaped(escaped)
}

fn is_plain_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let starts_well = chars
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_');

    starts_well
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        && !KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(text))
}
