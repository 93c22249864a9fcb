//! The renderer sink contract and its two implementations.
//!
//! A sink accepts exactly one `start`, then any number of emission calls in
//! any order, then exactly one `finish`. Sinks perform no cross-template
//! validation; each emission is independent.

pub mod owl2;
pub mod rdfxml;

pub use owl2::Owl2FunctionalFormat;
pub use rdfxml::RdfXmlFormat;

use wdc_model::{OneOfValues, PropertyIdValue};

/// Error raised by a renderer sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The underlying writer failed; fatal for the whole document.
    #[error("sink I/O failure: {0}")]
    Io(#[from] std::io::Error),
    /// The sink rejected one constraint; that constraint is dropped and the
    /// batch continues.
    #[error("constraint rejected: {0}")]
    Rejected(String),
}

impl RenderError {
    /// Whether this failure aborts the whole document (as opposed to
    /// dropping a single constraint).
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// A sink producing one output document in a concrete serialization.
///
/// One emission method per constraint kind plus one for free-text
/// annotation comments; every call is independently fallible.
pub trait RendererFormat {
    /// Opens the document. Called exactly once, before any emission.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] if the document header cannot be
    /// written.
    fn start(&mut self) -> Result<(), RenderError>;

    /// Closes the document. Called exactly once, after all emissions.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] if the document footer cannot be
    /// written.
    fn finish(&mut self) -> Result<(), RenderError>;

    /// Emits a free-text annotation comment on a property. The text must
    /// already be escaped by the caller.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn annotation_comment(
        &mut self,
        property: &PropertyIdValue,
        text: &str,
    ) -> Result<(), RenderError>;

    /// Emits a "one of" enumeration restriction.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Rejected`] for an empty enumeration, or
    /// [`RenderError::Io`] on writer failure.
    fn one_of(&mut self, property: &PropertyIdValue, values: &OneOfValues)
        -> Result<(), RenderError>;

    /// Emits a string-pattern restriction.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn format(&mut self, property: &PropertyIdValue, pattern: &str) -> Result<(), RenderError>;

    /// Emits an inclusive value-range restriction.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn range(
        &mut self,
        property: &PropertyIdValue,
        min: &str,
        max: &str,
    ) -> Result<(), RenderError>;

    /// Emits an at-most-one-value cardinality restriction.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn single_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError>;

    /// Emits an inverse-functionality (no shared values) axiom.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn unique_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError>;

    /// Emits a more-than-one-value cardinality restriction.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn multi_value(&mut self, property: &PropertyIdValue) -> Result<(), RenderError>;

    /// Emits a symmetry axiom.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn symmetric(&mut self, property: &PropertyIdValue) -> Result<(), RenderError>;

    /// Emits an inverse-properties axiom.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Io`] on writer failure.
    fn inverse(
        &mut self,
        property: &PropertyIdValue,
        inverse: &PropertyIdValue,
    ) -> Result<(), RenderError>;

    /// Emits pairwise property-disjointness axioms.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::Rejected`] for an empty property list, or
    /// [`RenderError::Io`] on writer failure.
    fn conflicts_with(
        &mut self,
        property: &PropertyIdValue,
        properties: &[PropertyIdValue],
    ) -> Result<(), RenderError>;
}
