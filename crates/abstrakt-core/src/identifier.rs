//! Identifiers for constellations, services and relationships.
//!
//! This module provides the [`Id`] type, an owned identifier that is cheap to
//! clone and can be used as a hash map key.

use std::{borrow::Borrow, convert::Infallible, fmt, str::FromStr, sync::Arc};

/// Owned identifier backed by a shared string.
///
/// Identifiers in a constellation document are opaque strings (GUIDs in most
/// real documents). Cloning an `Id` only bumps a reference count, so
/// identifiers can be freely copied into lookup tables and error values.
///
/// # Examples
///
/// ```
/// use abstrakt_core::identifier::Id;
///
/// let service_id = Id::new("9e1bcb3d-ff58-41d4-8779-f71e7b8800f8");
/// let same = service_id.clone();
///
/// assert_eq!(service_id, same);
/// assert_eq!(service_id, "9e1bcb3d-ff58-41d4-8779-f71e7b8800f8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Arc<str>);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
