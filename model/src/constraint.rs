//! The closed constraint variant set.
//!
//! Every variant carries the constrained property; kind-specific payloads are
//! named fields, never positional. [`ConstraintKind`] is the fieldless
//! parallel enumeration used by the dispatch table and the run report, and
//! [`Constraint::kind`] keeps the two in lockstep through an exhaustive
//! match.

use std::fmt;

use crate::value::{ItemIdValue, PropertyIdValue, QuantityValue};

/// The enumerated payload of a "one of" constraint.
///
/// Exactly one payload form exists per instance, selected at construction
/// time from the constrained property's datatype. Both forms use named
/// fields; payload identity is never inferred from argument position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOfValues {
    /// Allowed items, for a property of datatype `wikibase-item`.
    Items {
        /// Allowed item identifiers in source order, duplicates preserved.
        items: Vec<ItemIdValue>,
    },
    /// Allowed quantities, for a property of datatype `quantity`.
    Quantities {
        /// Allowed quantity values in source order, duplicates preserved.
        quantities: Vec<QuantityValue>,
    },
}

/// A typed, validated constraint declaration on a Wikidata property.
///
/// Instances are constructed only by the per-kind parsers, which enforce the
/// datatype-compatibility invariant: a payload whose type mismatches the
/// property's declared datatype is a parse failure, never a constructed
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The property's value must be one of an enumerated list.
    OneOf {
        /// The constrained property.
        property: PropertyIdValue,
        /// The enumerated allowed values.
        values: OneOfValues,
    },
    /// String values must match a pattern.
    Format {
        /// The constrained property.
        property: PropertyIdValue,
        /// The pattern, kept verbatim from the declaration.
        pattern: String,
    },
    /// Quantity or time values must fall within an inclusive range.
    Range {
        /// The constrained property.
        property: PropertyIdValue,
        /// Inclusive lower bound, lexical form.
        min: String,
        /// Inclusive upper bound, lexical form.
        max: String,
    },
    /// An entity should carry at most one value for the property.
    SingleValue {
        /// The constrained property.
        property: PropertyIdValue,
    },
    /// No two entities should share a value for the property.
    UniqueValue {
        /// The constrained property.
        property: PropertyIdValue,
    },
    /// An entity is expected to carry more than one value for the property.
    MultiValue {
        /// The constrained property.
        property: PropertyIdValue,
    },
    /// If `a → b` then `b → a` over the same property.
    Symmetric {
        /// The constrained property.
        property: PropertyIdValue,
    },
    /// If `a → b` over this property then `b → a` over the inverse property.
    Inverse {
        /// The constrained property.
        property: PropertyIdValue,
        /// The declared inverse property.
        inverse: PropertyIdValue,
    },
    /// An entity using this property should not also use the listed ones.
    ConflictsWith {
        /// The constrained property.
        property: PropertyIdValue,
        /// The conflicting properties in source order.
        properties: Vec<PropertyIdValue>,
    },
}

impl Constraint {
    /// The constrained property, common to every variant.
    #[must_use]
    pub fn property(&self) -> &PropertyIdValue {
        match self {
            Self::OneOf { property, .. }
            | Self::Format { property, .. }
            | Self::Range { property, .. }
            | Self::SingleValue { property }
            | Self::UniqueValue { property }
            | Self::MultiValue { property }
            | Self::Symmetric { property }
            | Self::Inverse { property, .. }
            | Self::ConflictsWith { property, .. } => property,
        }
    }

    /// The kind tag of this constraint.
    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::OneOf { .. } => ConstraintKind::OneOf,
            Self::Format { .. } => ConstraintKind::Format,
            Self::Range { .. } => ConstraintKind::Range,
            Self::SingleValue { .. } => ConstraintKind::SingleValue,
            Self::UniqueValue { .. } => ConstraintKind::UniqueValue,
            Self::MultiValue { .. } => ConstraintKind::MultiValue,
            Self::Symmetric { .. } => ConstraintKind::Symmetric,
            Self::Inverse { .. } => ConstraintKind::Inverse,
            Self::ConflictsWith { .. } => ConstraintKind::ConflictsWith,
        }
    }
}

/// Fieldless tags for the closed constraint variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `Constraint:One of`.
    OneOf,
    /// `Constraint:Format`.
    Format,
    /// `Constraint:Range`.
    Range,
    /// `Constraint:Single value`.
    SingleValue,
    /// `Constraint:Unique value`.
    UniqueValue,
    /// `Constraint:Multi value`.
    MultiValue,
    /// `Constraint:Symmetric`.
    Symmetric,
    /// `Constraint:Inverse`.
    Inverse,
    /// `Constraint:Conflicts with`.
    ConflictsWith,
}

impl ConstraintKind {
    /// Every kind, in dispatch-table order.
    pub const ALL: [Self; 9] = [
        Self::OneOf,
        Self::Format,
        Self::Range,
        Self::SingleValue,
        Self::UniqueValue,
        Self::MultiValue,
        Self::Symmetric,
        Self::Inverse,
        Self::ConflictsWith,
    ];

    /// The normalized template-name suffix this kind is declared under.
    #[must_use]
    pub fn template_suffix(self) -> &'static str {
        match self {
            Self::OneOf => "one of",
            Self::Format => "format",
            Self::Range => "range",
            Self::SingleValue => "single value",
            Self::UniqueValue => "unique value",
            Self::MultiValue => "multi value",
            Self::Symmetric => "symmetric",
            Self::Inverse => "inverse",
            Self::ConflictsWith => "conflicts with",
        }
    }
}

impl fmt::Display for ConstraintKind {
    // Log lines and report entries name kinds the way the source wiki does.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_suffix())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_tag_matches_variant() {
        let p = PropertyIdValue::new("P21").unwrap();
        let c = Constraint::SingleValue { property: p };
        assert_eq!(c.kind(), ConstraintKind::SingleValue);
        assert_eq!(c.property().id(), "P21");
    }

    #[test]
    fn suffixes_are_unique_and_total() {
        let mut seen = std::collections::HashSet::new();
        for kind in ConstraintKind::ALL {
            assert!(seen.insert(kind.template_suffix()), "duplicate suffix");
        }
        assert_eq!(seen.len(), ConstraintKind::ALL.len());
    }
}
