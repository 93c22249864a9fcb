//! One parser per constraint kind.
//!
//! All parsers satisfy the same contract: `parse` never mutates the
//! template, returns `Ok(None)` when the declaration is incomplete (missing
//! subject or missing required parameter), and fails only when a complete
//! declaration is invalid for the constrained property.

pub mod conflicts_with;
pub mod format;
pub mod inverse;
pub mod multi_value;
pub mod one_of;
pub mod range;
pub mod single_value;
pub mod symmetric;
pub mod unique_value;

pub use conflicts_with::ConflictsWithParser;
pub use format::FormatParser;
pub use inverse::InverseParser;
pub use multi_value::MultiValueParser;
pub use one_of::OneOfParser;
pub use range::RangeParser;
pub use single_value::SingleValueParser;
pub use symmetric::SymmetricParser;
pub use unique_value::UniqueValueParser;

use wdc_model::{Constraint, ConstraintKind, Datatype, PropertyIdValue, PropertyTypeRegistry, Template};

use crate::error::ParseError;

/// Template parameter names used by the constraint kinds.
pub mod params {
    /// The enumerated-values parameter of `Constraint:One of`.
    pub const VALUES: &str = "values";
    /// The pattern parameter of `Constraint:Format`.
    pub const PATTERN: &str = "pattern";
    /// The lower bound of `Constraint:Range`.
    pub const MIN: &str = "min";
    /// The upper bound of `Constraint:Range`.
    pub const MAX: &str = "max";
    /// The inverse property of `Constraint:Inverse`.
    pub const PROPERTY: &str = "property";
    /// The property list of `Constraint:Conflicts with`.
    pub const LIST: &str = "list";
}

/// A parser for one constraint kind.
pub trait ConstraintParser {
    /// Parses a template into a constraint of this kind.
    ///
    /// `Ok(None)` means the template does not carry a complete declaration
    /// of this kind; it is not an error and the template is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the declaration is complete but invalid:
    /// a datatype incompatible with the kind, an unresolvable subject or
    /// value token, or a property missing from the registry.
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError>;
}

/// Resolves the template subject to a property identifier.
///
/// Absent subject is `Ok(None)`; a present but malformed subject is a
/// [`ParseError::BadSubject`].
pub(crate) fn subject(template: &Template) -> Result<Option<PropertyIdValue>, ParseError> {
    match template.page() {
        None => Ok(None),
        Some(page) => PropertyIdValue::new(page)
            .map(Some)
            .map_err(|_| ParseError::BadSubject {
                page: page.to_owned(),
            }),
    }
}

/// Resolves a property's declared datatype through the registry.
pub(crate) fn datatype_of(
    property: &PropertyIdValue,
    registry: &dyn PropertyTypeRegistry,
) -> Result<Datatype, ParseError> {
    registry
        .datatype(property)
        .ok_or_else(|| ParseError::UnknownProperty {
            property: property.clone(),
        })
}

/// Fails with the uniform datatype-incompatibility error for `kind`.
pub(crate) fn type_mismatch(
    property: PropertyIdValue,
    kind: ConstraintKind,
    datatype: Datatype,
) -> ParseError {
    ParseError::TypeMismatch {
        property,
        kind,
        datatype,
    }
}
