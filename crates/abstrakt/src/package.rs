//! Packaging boundary.
//!
//! Turning a constellation into deployable artifacts (charts, manifests) lives
//! outside this crate. A [`Packager`] receives a constellation that has already
//! passed graph validation, so it may assume identifiers are unique and every
//! relationship resolves.

use std::error::Error;

use crate::semantic::Constellation;

/// Boxed error type returned by packagers.
pub type PackageError = Box<dyn Error + Send + Sync>;

/// Produces an artifact from a validated constellation.
pub trait Packager {
    /// What a successful run produces.
    type Artifact;

    /// Package `constellation`.
    ///
    /// # Errors
    ///
    /// Any failure of the packager itself; it is surfaced to callers as
    /// [`AbstraktError::Package`](crate::AbstraktError::Package).
    fn package(&mut self, constellation: &Constellation) -> Result<Self::Artifact, PackageError>;
}
