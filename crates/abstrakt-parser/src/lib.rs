//! # Abstrakt Parser
//!
//! Loader for constellation documents. This crate turns YAML source text into
//! the typed [`abstrakt_core::semantic::Constellation`] model.
//!
//! ## Usage
//!
//! ```
//! # use abstrakt_parser::{load, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//! name: "Azure Event Hubs Sample"
//! id: d6e4a5e9-696a-4626-ba7a-534d6ff450a5
//! services:
//!   - id: 9e1bcb3d-ff58-41d4-8779-f71e7b8800f8
//!     name: "Event Generator"
//!     type: EventGenerator
//! "#;
//!
//!     let constellation = load(source)?;
//!     assert_eq!(constellation.services().len(), 1);
//!     Ok(())
//! }
//! ```

mod document;
mod elaborate;
pub mod error;
mod span;

pub use span::Span;

use log::debug;
use serde_yaml::Value;

use abstrakt_core::semantic::Constellation;

use document::RawConstellation;
use error::{Diagnostic, ErrorCode, ParseError};

/// Load source text into a constellation.
///
/// The loading pipeline:
///
/// 1. **Read** - Parse the text as YAML and check the root is a mapping
/// 2. **Shape** - Deserialize into the raw document schema
/// 3. **Elaborate** - Check required fields and build the semantic model
///
/// No cross-referential validation happens here: relationships may still
/// point at services that do not exist.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not well-formed YAML, does not
/// have the shape of a constellation, or lacks a required field.
pub fn load(source: &str) -> Result<Constellation, ParseError> {
    // Step 1: Read
    let document: Value = serde_yaml::from_str(source)
        .map_err(|err| yaml_diagnostic(ErrorCode::E001, "malformed YAML", &err, source))?;
    match &document {
        Value::Mapping(_) => {}
        Value::Null => {
            return Err(Diagnostic::new(ErrorCode::E002, "constellation document is empty")
                .with_help("a constellation needs at least a `name` and an `id`")
                .into());
        }
        other => {
            return Err(Diagnostic::new(
                ErrorCode::E002,
                format!(
                    "constellation document must be a mapping, found {}",
                    kind_of(other)
                ),
            )
            .into());
        }
    }

    // Step 2: Shape
    let raw: RawConstellation = serde_yaml::from_str(source).map_err(|err| {
        yaml_diagnostic(ErrorCode::E002, "unexpected document shape", &err, source)
    })?;

    // Step 3: Elaborate
    let constellation = elaborate::elaborate(raw)?;

    debug!(
        constellation_id = constellation.id().as_str(),
        services = constellation.services().len(),
        relationships = constellation.relationships().len();
        "Constellation loaded"
    );

    Ok(constellation)
}

/// Build a diagnostic from a YAML error, pointing at its location if known.
fn yaml_diagnostic(
    code: ErrorCode,
    prefix: &str,
    err: &serde_yaml::Error,
    source: &str,
) -> ParseError {
    let diagnostic = Diagnostic::new(code, format!("{prefix}: {err}"));
    match err.location() {
        Some(location) => diagnostic
            .with_label(Span::at(location.index(), source.len()), "here")
            .into(),
        None => diagnostic.into(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT_HUBS: &str = r#"
name: "Azure Event Hubs Sample"
id: "d6e4a5e9-696a-4626-ba7a-534d6ff450a5"
services:
  - id: "9e1bcb3d-ff58-41d4-8779-f71e7b8800f8"
    name: "Event Generator"
    type: "EventGenerator"
    properties: {}
  - id: "3aa1e546-1ed5-4d67-a59c-be0d5905b490"
    name: "Azure Event Hub"
    type: "EventHub"
    properties: {}
relationships:
  - id: "211a55bd-5d92-446c-8be8-190f8f0e623e"
    description: "Event Generator to Event Hub connection"
    from: "9e1bcb3d-ff58-41d4-8779-f71e7b8800f8"
    to: "3aa1e546-1ed5-4d67-a59c-be0d5905b490"
    name: "Generator to Event Hubs Link"
"#;

    fn codes(err: &ParseError) -> Vec<ErrorCode> {
        err.diagnostics().iter().map(Diagnostic::code).collect()
    }

    #[test]
    fn test_load_event_hubs() {
        let constellation = load(EVENT_HUBS).unwrap();

        assert_eq!(constellation.name(), "Azure Event Hubs Sample");
        assert_eq!(constellation.id(), "d6e4a5e9-696a-4626-ba7a-534d6ff450a5");
        assert_eq!(constellation.services().len(), 2);
        assert_eq!(constellation.services()[0].name(), "Event Generator");
        assert_eq!(constellation.services()[1].kind(), "EventHub");
        assert_eq!(constellation.relationships().len(), 1);

        let link = &constellation.relationships()[0];
        assert_eq!(link.from(), "9e1bcb3d-ff58-41d4-8779-f71e7b8800f8");
        assert_eq!(link.to(), "3aa1e546-1ed5-4d67-a59c-be0d5905b490");
        assert_eq!(link.name(), "Generator to Event Hubs Link");
        assert_eq!(link.description(), "Event Generator to Event Hub connection");
    }

    #[test]
    fn test_load_capitalised_keys() {
        let source = r#"
Name: "Azure Event Hubs Sample"
Id: d6e4a5e9-696a-4626-ba7a-534d6ff450a5
Properties: {}
Services:
  - Id: 9e1bcb3d-ff58-41d4-8779-f71e7b8800f8
    Name: "Event Generator"
    Type: EventGenerator
    Properties: {}
Relationships:
  - Id: 211a55bd-5d92-446c-8be8-190f8f0e623e
    Description: "Event Generator to itself"
    From: 9e1bcb3d-ff58-41d4-8779-f71e7b8800f8
    To: 9e1bcb3d-ff58-41d4-8779-f71e7b8800f8
    Name: "Loop"
"#;

        let constellation = load(source).unwrap();

        assert_eq!(constellation.name(), "Azure Event Hubs Sample");
        assert_eq!(constellation.services()[0].kind(), "EventGenerator");
        assert_eq!(
            constellation.relationships()[0].description(),
            "Event Generator to itself"
        );
    }

    #[test]
    fn test_load_preserves_declaration_order() {
        let source = r#"
name: Ordered
id: o
services:
  - { id: z, name: Zulu }
  - { id: a, name: Alpha }
  - { id: m, name: Mike }
relationships:
  - { from: m, to: a }
  - { from: z, to: m }
"#;

        let constellation = load(source).unwrap();

        let names: Vec<&str> = constellation.services().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Zulu", "Alpha", "Mike"]);
        assert_eq!(constellation.relationships()[0].from(), "m");
        assert_eq!(constellation.relationships()[1].from(), "z");
    }

    #[test]
    fn test_load_empty_sequences() {
        let constellation = load("name: Empty\nid: e\nservices: []\nrelationships: []\n").unwrap();

        assert!(constellation.services().is_empty());
        assert!(constellation.relationships().is_empty());
    }

    #[test]
    fn test_load_missing_sequences() {
        let constellation = load("name: Bare\nid: b\n").unwrap();

        assert!(constellation.services().is_empty());
        assert!(constellation.relationships().is_empty());
        assert!(constellation.properties().is_empty());
    }

    #[test]
    fn test_malformed_yaml_has_location() {
        let source = "name: Broken\nid: [unclosed\n";
        let err = load(source).unwrap_err();

        assert_eq!(codes(&err), [ErrorCode::E001]);
        let labels = err.diagnostics()[0].labels();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].span().end() <= source.len());
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = load("- just\n- a list\n").unwrap_err();

        assert_eq!(codes(&err), [ErrorCode::E002]);
        assert_eq!(
            err.diagnostics()[0].message(),
            "constellation document must be a mapping, found a sequence"
        );
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let err = load("name: Shape\nid: s\nservices: not-a-list\n").unwrap_err();

        assert_eq!(codes(&err), [ErrorCode::E002]);
    }

    #[test]
    fn test_missing_name_and_id() {
        let err = load("services: []\n").unwrap_err();

        assert_eq!(codes(&err), [ErrorCode::E100, ErrorCode::E100]);
    }

    #[test]
    fn test_empty_document() {
        assert!(load("").is_err());
        assert!(load("# only a comment\n").is_err());
    }

    #[test]
    fn test_dangling_reference_is_not_checked_here() {
        let source = "name: D\nid: d\nrelationships:\n  - { from: ghost, to: ghost }\n";

        assert!(load(source).is_ok());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn service_names_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Za-z][A-Za-z0-9 _-]{0,15}", 0..8)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every declared service is loaded, in order, with its name untouched.
    fn check_services_loaded_in_order(names: &[String]) -> Result<(), TestCaseError> {
        let mut source = String::from("name: Generated\nid: generated\nservices:\n");
        for (idx, name) in names.iter().enumerate() {
            source.push_str(&format!("  - id: svc-{idx}\n    name: \"{name}\"\n"));
        }

        let constellation = load(&source);
        prop_assert!(constellation.is_ok(), "{constellation:?}");
        let constellation = constellation.unwrap();

        let loaded: Vec<&str> = constellation.services().iter().map(|s| s.name()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(loaded, expected);
        Ok(())
    }

    /// Arbitrary text either loads or fails with at least one diagnostic.
    fn check_arbitrary_text_is_handled(text: &str) -> Result<(), TestCaseError> {
        if let Err(err) = load(text) {
            prop_assert!(!err.diagnostics().is_empty());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn services_loaded_in_order(names in service_names_strategy()) {
            check_services_loaded_in_order(&names)?;
        }

        #[test]
        fn arbitrary_text_is_handled(text in "\\PC{0,64}") {
            check_arbitrary_text_is_handled(&text)?;
        }
    }
}
