//! Elaboration: raw document → semantic constellation.
//!
//! Checks required fields, normalises scalar values to strings and converts
//! property bags into [`abstrakt_core::semantic::Value`]s. Every problem found
//! is collected; the constellation is only returned when there are none.

use log::{debug, trace};
use serde_yaml::{Mapping, Value as YamlValue};

use abstrakt_core::{
    identifier::Id,
    semantic::{Constellation, Properties, Relationship, Service, Value},
};

use crate::{
    document::{RawConstellation, RawRelationship, RawService},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
};

/// Elaborate a raw document into a [`Constellation`].
pub(crate) fn elaborate(raw: RawConstellation) -> Result<Constellation, ParseError> {
    let mut elaborator = Elaborator::default();

    let name = elaborator.required("", "name", raw.name);
    let id = elaborator.required("", "id", raw.id);
    let properties = elaborator.properties("", raw.properties);

    let services: Vec<Service> = raw
        .services
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, service)| elaborator.service(index, service))
        .collect();

    let relationships: Vec<Relationship> = raw
        .relationships
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, relationship)| elaborator.relationship(index, relationship))
        .collect();

    elaborator.collector.finish()?;

    Ok(Constellation::new(
        Id::from(id),
        name,
        services,
        relationships,
        properties,
    ))
}

#[derive(Debug, Default)]
struct Elaborator {
    collector: DiagnosticCollector,
}

impl Elaborator {
    fn service(&mut self, index: usize, raw: RawService) -> Service {
        let path = format!("services[{index}]");

        let id = self.required(&path, "id", raw.id);
        let name = match self.optional(&path, "name", raw.name) {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                debug!(path = path, service_id = id; "Service has no name, using its id");
                id.clone()
            }
        };
        let kind = self.optional(&path, "type", raw.kind).unwrap_or_default();
        let properties = self.properties(&path, raw.properties);

        trace!(path = path, service_id = id; "Elaborated service");
        Service::new(Id::from(id), name, kind, properties)
    }

    fn relationship(&mut self, index: usize, raw: RawRelationship) -> Relationship {
        let path = format!("relationships[{index}]");

        let id = self
            .optional(&path, "id", raw.id)
            .filter(|id| !id.trim().is_empty())
            .map(Id::from);
        let from = self.required(&path, "from", raw.from);
        let to = self.required(&path, "to", raw.to);
        let name = self.optional(&path, "name", raw.name).unwrap_or_default();
        let description = self
            .optional(&path, "description", raw.description)
            .unwrap_or_default();

        trace!(path = path, from = from, to = to; "Elaborated relationship");
        Relationship::new(id, Id::from(from), Id::from(to), name, description)
    }

    /// Read a required scalar field.
    ///
    /// On failure a diagnostic is emitted and an empty placeholder returned;
    /// the placeholder never escapes because [`elaborate`] fails afterwards.
    fn required(&mut self, path: &str, field: &str, value: Option<YamlValue>) -> String {
        match scalar_text(value) {
            Ok(Some(text)) if text.trim().is_empty() => {
                self.collector.emit(Diagnostic::empty_field(path, field));
                String::new()
            }
            Ok(Some(text)) => text,
            Ok(None) => {
                self.collector.emit(Diagnostic::missing_field(path, field));
                String::new()
            }
            Err(found) => {
                self.emit_not_scalar(path, field, found);
                String::new()
            }
        }
    }

    /// Read an optional scalar field.
    fn optional(&mut self, path: &str, field: &str, value: Option<YamlValue>) -> Option<String> {
        match scalar_text(value) {
            Ok(text) => text,
            Err(found) => {
                self.emit_not_scalar(path, field, found);
                None
            }
        }
    }

    fn properties(&mut self, path: &str, mapping: Option<Mapping>) -> Properties {
        let Some(mapping) = mapping else {
            return Properties::new();
        };

        match convert_mapping(mapping) {
            Ok(properties) => properties,
            Err(found) => {
                let location = if path.is_empty() {
                    "properties".to_string()
                } else {
                    format!("{path}.properties")
                };
                self.collector.emit(
                    Diagnostic::new(
                        ErrorCode::E002,
                        format!("property keys in {location} must be scalars, found {found}"),
                    )
                    .with_help("use plain strings as property names"),
                );
                Properties::new()
            }
        }
    }

    fn emit_not_scalar(&mut self, path: &str, field: &str, found: &'static str) {
        let location = if path.is_empty() {
            String::new()
        } else {
            format!(" in {path}")
        };
        self.collector.emit(
            Diagnostic::new(
                ErrorCode::E002,
                format!("field `{field}`{location} must be a string, found {found}"),
            )
            .with_help(format!("quote the `{field}` value")),
        );
    }
}

/// Text of a scalar value.
///
/// `Ok(None)` for an absent or null value, `Err` with the found kind for
/// sequences and mappings. Numbers and booleans are taken verbatim.
fn scalar_text(value: Option<YamlValue>) -> Result<Option<String>, &'static str> {
    match value {
        None | Some(YamlValue::Null) => Ok(None),
        Some(YamlValue::String(text)) => Ok(Some(text)),
        Some(YamlValue::Number(number)) => Ok(Some(number.to_string())),
        Some(YamlValue::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(YamlValue::Tagged(tagged)) => scalar_text(Some(tagged.value)),
        Some(YamlValue::Sequence(_)) => Err("a sequence"),
        Some(YamlValue::Mapping(_)) => Err("a mapping"),
    }
}

fn convert_mapping(mapping: Mapping) -> Result<Properties, &'static str> {
    let mut properties = Properties::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match scalar_text(Some(key)) {
            Ok(Some(key)) => key,
            Ok(None) => return Err("a null key"),
            Err(found) => return Err(found),
        };
        properties.insert(key, convert_value(value)?);
    }
    Ok(properties)
}

fn convert_value(value: YamlValue) -> Result<Value, &'static str> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(flag) => Value::Bool(flag),
        YamlValue::Number(number) => match number.as_i64() {
            Some(integer) => Value::Integer(integer),
            None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
        },
        YamlValue::String(text) => Value::String(text),
        YamlValue::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(convert_value)
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => Value::Map(convert_mapping(mapping)?),
        YamlValue::Tagged(tagged) => convert_value(tagged.value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> RawConstellation {
        serde_yaml::from_str(source).expect("test document should deserialize")
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(None), Ok(None));
        assert_eq!(scalar_text(Some(YamlValue::Null)), Ok(None));
        assert_eq!(
            scalar_text(Some(YamlValue::String("a b".to_string()))),
            Ok(Some("a b".to_string()))
        );
        assert_eq!(
            scalar_text(Some(YamlValue::Number(42_i64.into()))),
            Ok(Some("42".to_string()))
        );
        assert_eq!(
            scalar_text(Some(YamlValue::Sequence(Vec::new()))),
            Err("a sequence")
        );
    }

    #[test]
    fn test_service_name_falls_back_to_id() {
        let constellation = elaborate(raw(
            r#"
name: Sample
id: c1
services:
  - id: svc-1
  - id: svc-2
    name: "  "
"#,
        ))
        .unwrap();

        assert_eq!(constellation.services()[0].name(), "svc-1");
        assert_eq!(constellation.services()[1].name(), "svc-2");
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let err = elaborate(raw(
            r#"
services:
  - name: Orphan
relationships:
  - from: a
"#,
        ))
        .unwrap_err();

        let messages: Vec<&str> = err.diagnostics().iter().map(|d| d.message()).collect();
        assert_eq!(
            messages,
            [
                "missing required field `name`",
                "missing required field `id`",
                "missing required field `id` in services[0]",
                "missing required field `to` in relationships[0]",
            ]
        );
    }

    #[test]
    fn test_empty_required_field() {
        let err = elaborate(raw("name: ''\nid: c1\n")).unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), ErrorCode::E101);
    }

    #[test]
    fn test_non_scalar_field_is_shape_error() {
        let err = elaborate(raw("name: [a, b]\nid: c1\n")).unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), ErrorCode::E002);
        assert_eq!(
            err.diagnostics()[0].message(),
            "field `name` must be a string, found a sequence"
        );
    }

    #[test]
    fn test_numeric_identifiers_taken_verbatim() {
        let constellation = elaborate(raw(
            r#"
name: Numbers
id: 7
services:
  - id: 1
relationships:
  - from: 1
    to: 1
"#,
        ))
        .unwrap();

        assert_eq!(constellation.id(), "7");
        assert_eq!(constellation.services()[0].id(), "1");
        assert_eq!(constellation.relationships()[0].to(), "1");
    }

    #[test]
    fn test_properties_converted_in_order() {
        let constellation = elaborate(raw(
            r#"
name: Props
id: p
properties:
  region: eastus
  replicas: 3
  ratio: 0.5
  enabled: true
  tags: [a, b]
  nested:
    key: value
"#,
        ))
        .unwrap();

        let props = constellation.properties();
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["region", "replicas", "ratio", "enabled", "tags", "nested"]
        );
        assert_eq!(props["region"], Value::from("eastus"));
        assert_eq!(props["replicas"], Value::Integer(3));
        assert_eq!(props["ratio"], Value::Float(0.5));
        assert_eq!(props["enabled"], Value::Bool(true));
        assert_eq!(
            props["tags"],
            Value::Sequence(vec![Value::from("a"), Value::from("b")])
        );
        let Value::Map(nested) = &props["nested"] else {
            panic!("nested should be a map");
        };
        assert_eq!(nested["key"], Value::from("value"));
    }

    #[test]
    fn test_relationship_optional_fields_default() {
        let constellation = elaborate(raw(
            r#"
name: Links
id: l
services:
  - id: a
relationships:
  - from: a
    to: a
"#,
        ))
        .unwrap();

        let link = &constellation.relationships()[0];
        assert!(link.id().is_none());
        assert_eq!(link.name(), "");
        assert_eq!(link.description(), "");
    }
}
