//! Raw document shape as read from YAML.
//!
//! These types mirror the constellation schema with every field optional, so
//! that deserialization only fails on genuinely malformed shapes. Required
//! fields are checked during elaboration, where all omissions can be reported
//! together.
//!
//! Keys are accepted in lowercase and in the capitalised form used by older
//! constellation documents (`Name`, `Id`, `Services`, ...).

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Root of a constellation document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConstellation {
    #[serde(alias = "Name")]
    pub name: Option<Value>,
    #[serde(alias = "Id", alias = "ID")]
    pub id: Option<Value>,
    #[serde(alias = "Properties")]
    pub properties: Option<Mapping>,
    #[serde(alias = "Services")]
    pub services: Option<Vec<RawService>>,
    #[serde(alias = "Relationships")]
    pub relationships: Option<Vec<RawRelationship>>,
}

/// One entry of `services`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawService {
    #[serde(alias = "Id", alias = "ID")]
    pub id: Option<Value>,
    #[serde(alias = "Name")]
    pub name: Option<Value>,
    #[serde(rename = "type", alias = "Type")]
    pub kind: Option<Value>,
    #[serde(alias = "Properties")]
    pub properties: Option<Mapping>,
}

/// One entry of `relationships`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRelationship {
    #[serde(alias = "Id", alias = "ID")]
    pub id: Option<Value>,
    #[serde(alias = "From")]
    pub from: Option<Value>,
    #[serde(alias = "To")]
    pub to: Option<Value>,
    #[serde(alias = "Name")]
    pub name: Option<Value>,
    #[serde(alias = "Description")]
    pub description: Option<Value>,
}
