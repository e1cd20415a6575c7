//! Graph structure for constellations.
//!
//! This module turns a loaded [`Constellation`](crate::semantic::Constellation)
//! into a [`ConstellationGraph`]: the abstract directed graph handed to the
//! exporters. Building the graph is where identity and referential integrity
//! are established:
//!
//! - every service `id` must be unique ([`GraphError::DuplicateIdentifier`]),
//! - every relationship endpoint must name a declared service
//!   ([`GraphError::UnresolvedReference`]).
//!
//! Node and edge order always follows declaration order in the document.

mod builder;
mod graph;

pub use builder::build;
pub use graph::{ConstellationGraph, GraphEdge, GraphNode, sanitize};

use std::fmt;

use thiserror::Error;

use crate::identifier::Id;

/// Which end of a relationship failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

/// Position and identifier of a relationship, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRef {
    index: usize,
    id: Option<Id>,
}

impl RelationshipRef {
    pub fn new(index: usize, id: Option<Id>) -> Self {
        Self { index, id }
    }

    /// Position in the document's `relationships` sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }
}

impl fmt::Display for RelationshipRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "relationships[{}]", self.index)?;
        if let Some(id) = &self.id {
            write!(f, " (`{id}`)")?;
        }
        Ok(())
    }
}

/// Referential-integrity failures found while building the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two services share an identifier.
    #[error(
        "service identifier `{id}` is declared more than once \
         (services[{first}] and services[{duplicate}])"
    )]
    DuplicateIdentifier {
        id: Id,
        first: usize,
        duplicate: usize,
    },

    /// A relationship endpoint names no declared service.
    #[error("{relationship} references unknown service `{missing}` in `{endpoint}`")]
    UnresolvedReference {
        relationship: RelationshipRef,
        endpoint: Endpoint,
        missing: Id,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_identifier_display() {
        let err = GraphError::DuplicateIdentifier {
            id: Id::new("svc-1"),
            first: 0,
            duplicate: 3,
        };

        assert_eq!(
            err.to_string(),
            "service identifier `svc-1` is declared more than once (services[0] and services[3])"
        );
    }

    #[test]
    fn test_unresolved_reference_display() {
        let with_id = GraphError::UnresolvedReference {
            relationship: RelationshipRef::new(1, Some(Id::new("link-7"))),
            endpoint: Endpoint::From,
            missing: Id::new("ghost"),
        };
        let without_id = GraphError::UnresolvedReference {
            relationship: RelationshipRef::new(0, None),
            endpoint: Endpoint::To,
            missing: Id::new("ghost"),
        };

        assert_eq!(
            with_id.to_string(),
            "relationships[1] (`link-7`) references unknown service `ghost` in `from`"
        );
        assert_eq!(
            without_id.to_string(),
            "relationships[0] references unknown service `ghost` in `to`"
        );
    }
}
