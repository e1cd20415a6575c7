//! Identity resolution and graph construction.

use std::collections::HashMap;

use log::{Level, debug, log, warn};

use crate::{
    identifier::Id,
    semantic::{Constellation, Service},
};

use super::{ConstellationGraph, Endpoint, GraphError, RelationshipRef, sanitize};

/// Build the abstract graph of a constellation.
///
/// 1. Reject duplicate service identifiers.
/// 2. Map every service `id` to its sanitized display name.
/// 3. Add one node per service, in declaration order.
/// 4. Resolve both endpoints of every relationship and add one edge per
///    relationship, in declaration order.
///
/// `progress` is the level at which each added node and edge is logged; pass
/// [`Level::Info`] for verbose runs.
///
/// # Errors
///
/// Returns [`GraphError::DuplicateIdentifier`] before any edge is looked at if
/// two services share an `id`, and [`GraphError::UnresolvedReference`] for the
/// first relationship whose `from` or `to` names no service.
pub fn build(
    constellation: &Constellation,
    progress: Level,
) -> Result<ConstellationGraph, GraphError> {
    let services = constellation.services();
    check_unique_ids(services)?;

    let identities = IdentityMap::new(services);
    let mut graph = ConstellationGraph::new(sanitize(constellation.name()));

    for service in services {
        let label = identities.label_of(service.id());
        log!(
            progress,
            service_id = service.id().as_str(),
            node = label;
            "Adding node"
        );
        graph.add_node(label.to_string(), service.name().to_string());
    }

    for (index, relationship) in constellation.relationships().iter().enumerate() {
        let resolve = |endpoint: Endpoint, id: &Id| {
            identities
                .resolve(id)
                .ok_or_else(|| GraphError::UnresolvedReference {
                    relationship: RelationshipRef::new(index, relationship.id().cloned()),
                    endpoint,
                    missing: id.clone(),
                })
        };
        let source = resolve(Endpoint::From, relationship.from())?;
        let target = resolve(Endpoint::To, relationship.to())?;

        log!(
            progress,
            from = relationship.from().as_str(),
            to = relationship.to().as_str();
            "Adding relationship {source} -> {target}"
        );
        graph.add_edge(source.to_string(), target.to_string());
    }

    debug!(
        graph = graph.name(),
        nodes = graph.node_count(),
        edges = graph.edge_count();
        "Graph built"
    );

    Ok(graph)
}

/// Fails on the first service whose `id` was already declared.
fn check_unique_ids(services: &[Service]) -> Result<(), GraphError> {
    let mut seen: HashMap<&Id, usize> = HashMap::with_capacity(services.len());
    for (index, service) in services.iter().enumerate() {
        if let Some(&first) = seen.get(service.id()) {
            return Err(GraphError::DuplicateIdentifier {
                id: service.id().clone(),
                first,
                duplicate: index,
            });
        }
        seen.insert(service.id(), index);
    }
    Ok(())
}

/// Service `id` → sanitized node label.
///
/// Only used for lookups; never iterated.
struct IdentityMap<'a> {
    labels: HashMap<&'a Id, String>,
}

impl<'a> IdentityMap<'a> {
    /// Services must have unique ids.
    fn new(services: &'a [Service]) -> Self {
        let mut labels = HashMap::with_capacity(services.len());
        let mut owners: HashMap<String, &Id> = HashMap::with_capacity(services.len());

        for service in services {
            let label = sanitize(service.name());
            if let Some(owner) = owners.get(&label) {
                warn!(
                    node = label,
                    first_service = owner.as_str(),
                    second_service = service.id().as_str();
                    "Two services render to the same node"
                );
            } else {
                owners.insert(label.clone(), service.id());
            }
            labels.insert(service.id(), label);
        }

        Self { labels }
    }

    fn resolve(&self, id: &Id) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Label of a service known to be in the map.
    fn label_of(&self, id: &Id) -> &str {
        self.resolve(id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::semantic::{Properties, Relationship};

    use super::*;

    fn service(id: &str, name: &str) -> Service {
        Service::new(Id::new(id), name, "", Properties::new())
    }

    fn link(from: &str, to: &str) -> Relationship {
        Relationship::new(None, Id::new(from), Id::new(to), "", "")
    }

    fn constellation(services: Vec<Service>, relationships: Vec<Relationship>) -> Constellation {
        Constellation::new(
            Id::new("c"),
            "Test Constellation",
            services,
            relationships,
            Properties::new(),
        )
    }

    #[test]
    fn test_build_event_hubs_self_loop() {
        let graph = build(
            &Constellation::new(
                Id::new("d6e4"),
                "Azure Event Hubs Sample",
                vec![service("9e1b", "Event Generator")],
                vec![link("9e1b", "9e1b")],
                Properties::new(),
            ),
            Level::Debug,
        )
        .unwrap();

        assert_eq!(graph.name(), "Azure_Event_Hubs_Sample");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].label(), "Event_Generator");
        assert_eq!(graph.nodes()[0].display_name(), "Event Generator");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].source(), "Event_Generator");
        assert_eq!(graph.edges()[0].target(), "Event_Generator");
    }

    #[test]
    fn test_build_preserves_declaration_order() {
        let graph = build(
            &constellation(
                vec![service("3", "Gamma"), service("1", "Alpha"), service("2", "Beta")],
                vec![link("2", "3"), link("1", "2"), link("3", "1")],
            ),
            Level::Debug,
        )
        .unwrap();

        let labels: Vec<&str> = graph.nodes().iter().map(|n| n.label()).collect();
        assert_eq!(labels, ["Gamma", "Alpha", "Beta"]);

        let edges: Vec<(&str, &str)> = graph
            .edges()
            .iter()
            .map(|e| (e.source(), e.target()))
            .collect();
        assert_eq!(
            edges,
            [("Beta", "Gamma"), ("Alpha", "Beta"), ("Gamma", "Alpha")]
        );
    }

    #[test]
    fn test_build_empty_constellation() {
        let graph = build(&constellation(Vec::new(), Vec::new()), Level::Debug).unwrap();

        assert_eq!(graph.name(), "Test_Constellation");
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unresolved_from() {
        let err = build(
            &constellation(vec![service("a", "A")], vec![link("a", "a"), link("ghost", "a")]),
            Level::Debug,
        )
        .unwrap_err();

        assert_eq!(
            err,
            GraphError::UnresolvedReference {
                relationship: RelationshipRef::new(1, None),
                endpoint: Endpoint::From,
                missing: Id::new("ghost"),
            }
        );
    }

    #[test]
    fn test_unresolved_to_carries_relationship_id() {
        let relationship = Relationship::new(
            Some(Id::new("link-1")),
            Id::new("a"),
            Id::new("nowhere"),
            "",
            "",
        );
        let err = build(
            &constellation(vec![service("a", "A")], vec![relationship]),
            Level::Debug,
        )
        .unwrap_err();

        let GraphError::UnresolvedReference {
            relationship,
            endpoint,
            missing,
        } = err
        else {
            panic!("expected an unresolved reference, got {err:?}");
        };
        assert_eq!(relationship.id().map(Id::as_str), Some("link-1"));
        assert_eq!(endpoint, Endpoint::To);
        assert_eq!(missing, "nowhere");
    }

    #[test]
    fn test_duplicate_identifier_detected_before_edges() {
        // The dangling relationship would fail too; the duplicate must win.
        let err = build(
            &constellation(
                vec![service("a", "First"), service("b", "B"), service("a", "Second")],
                vec![link("ghost", "a")],
            ),
            Level::Debug,
        )
        .unwrap_err();

        assert_eq!(
            err,
            GraphError::DuplicateIdentifier {
                id: Id::new("a"),
                first: 0,
                duplicate: 2,
            }
        );
    }

    #[test]
    fn test_same_label_for_distinct_ids_is_allowed() {
        let graph = build(
            &constellation(
                vec![service("1", "Event Hub"), service("2", "Event_Hub")],
                vec![link("1", "2")],
            ),
            Level::Debug,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges()[0].source(), "Event_Hub");
        assert_eq!(graph.edges()[0].target(), "Event_Hub");
    }

    #[test]
    fn test_identity_map_resolves_by_id_not_name() {
        let services = vec![service("id-1", "Shared Name"), service("id-2", "Other")];
        let identities = IdentityMap::new(&services);

        assert_eq!(identities.resolve(&Id::new("id-1")), Some("Shared_Name"));
        assert_eq!(identities.resolve(&Id::new("Shared Name")), None);
    }
}
