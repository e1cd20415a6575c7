//! Constellation document types.
//!
//! - [`Constellation`] - The root document
//! - [`Service`] - A deployable unit, rendered as a graph node
//! - [`Relationship`] - A directed link between two services, rendered as an edge

use crate::{identifier::Id, semantic::value::Properties};

/// A fully loaded constellation document.
///
/// Services and relationships are kept in the order they were declared in the
/// source document. Every later stage derives its output order from these
/// sequences.
///
/// A `Constellation` is only checked for the presence of its required fields.
/// Identity and referential integrity between services and relationships are
/// established by the graph builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    id: Id,
    name: String,
    services: Vec<Service>,
    relationships: Vec<Relationship>,
    properties: Properties,
}

impl Constellation {
    /// Create a new constellation.
    ///
    /// # Arguments
    ///
    /// * `id` - Globally unique constellation identifier
    /// * `name` - Display name, may contain spaces
    /// * `services` - Services in declaration order
    /// * `relationships` - Relationships in declaration order
    /// * `properties` - Open key/value bag
    pub fn new(
        id: Id,
        name: impl Into<String>,
        services: Vec<Service>,
        relationships: Vec<Relationship>,
        properties: Properties,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            services,
            relationships,
            properties,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the services in declaration order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Borrow the relationships in declaration order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A deployable unit of the constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    id: Id,
    name: String,
    kind: String,
    properties: Properties,
}

impl Service {
    /// Create a new service.
    ///
    /// `kind` is the document's `type` tag, e.g. `EventGenerator`.
    pub fn new(
        id: Id,
        name: impl Into<String>,
        kind: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            properties,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Display name as written in the document (spaces preserved).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The service `type` tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A directed relationship between two services.
///
/// `from` and `to` are service identifiers. They are not guaranteed to resolve
/// until the constellation has been through the graph builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    id: Option<Id>,
    from: Id,
    to: Id,
    name: String,
    description: String,
}

impl Relationship {
    /// Create a new relationship from `from` to `to`.
    pub fn new(
        id: Option<Id>,
        from: Id,
        to: Id,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            from,
            to,
            name: name.into(),
            description: description.into(),
        }
    }

    /// The relationship identifier, if the document declared one.
    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Identifier of the source service.
    pub fn from(&self) -> &Id {
        &self.from
    }

    /// Identifier of the destination service.
    pub fn to(&self) -> &Id {
        &self.to
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constellation_accessors() {
        let generator = Service::new(
            Id::new("9e1b"),
            "Event Generator",
            "EventGenerator",
            Properties::new(),
        );
        let link = Relationship::new(
            Some(Id::new("211a")),
            Id::new("9e1b"),
            Id::new("9e1b"),
            "Generator loop",
            "",
        );
        let constellation = Constellation::new(
            Id::new("d6e4"),
            "Azure Event Hubs Sample",
            vec![generator],
            vec![link],
            Properties::new(),
        );

        assert_eq!(constellation.id(), "d6e4");
        assert_eq!(constellation.name(), "Azure Event Hubs Sample");
        assert_eq!(constellation.services().len(), 1);
        assert_eq!(constellation.services()[0].kind(), "EventGenerator");
        assert_eq!(constellation.relationships()[0].from(), "9e1b");
        assert_eq!(
            constellation.relationships()[0].id().map(Id::as_str),
            Some("211a")
        );
    }

    #[test]
    fn test_relationship_without_id() {
        let link = Relationship::new(None, Id::new("a"), Id::new("b"), "", "");

        assert!(link.id().is_none());
        assert_eq!(link.to(), "b");
    }
}
