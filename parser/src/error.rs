//! Parse failure taxonomy.
//!
//! Missing fields and unrecognized template names are *not* errors: the
//! former makes a parser return `Ok(None)` and the latter makes the
//! dispatcher skip the template. Only declarations that are present but
//! invalid fail.

use wdc_model::{ConstraintKind, Datatype, PropertyIdValue};

/// A constraint declaration that is present but invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The constraint kind is not meaningful for the property's datatype.
    #[error("'Constraint:{kind}' cannot be used for property {property} because its datatype is '{datatype}'")]
    TypeMismatch {
        /// The constrained property.
        property: PropertyIdValue,
        /// The declared constraint kind.
        kind: ConstraintKind,
        /// The property's actual datatype.
        datatype: Datatype,
    },
    /// The subject property has no entry in the datatype registry.
    #[error("property {property} has no registered datatype")]
    UnknownProperty {
        /// The unresolved property.
        property: PropertyIdValue,
    },
    /// The template subject is not a well-formed property identifier.
    #[error("template subject '{page}' is not a property identifier")]
    BadSubject {
        /// The subject text as written.
        page: String,
    },
    /// A value token could not be resolved to the expected form.
    #[error("property {property}: cannot read '{token}' as {expected}")]
    InvalidValue {
        /// The constrained property.
        property: PropertyIdValue,
        /// The offending token, trimmed.
        token: String,
        /// What the token was expected to be.
        expected: &'static str,
    },
}
