//! Routes templates to the parser for their constraint kind.
//!
//! The routing table is derived from the closed
//! [`ConstraintKind`](wdc_model::ConstraintKind) enumeration: each kind's
//! normalized template suffix maps to exactly one parser, and the
//! kind-to-parser match is exhaustive, so adding a kind without a parser is
//! a compile failure rather than a silent skip.

use wdc_model::{Constraint, ConstraintKind, PropertyTypeRegistry, Template};

use crate::error::ParseError;
use crate::kinds::{
    ConflictsWithParser, ConstraintParser, FormatParser, InverseParser, MultiValueParser,
    OneOfParser, RangeParser, SingleValueParser, SymmetricParser, UniqueValueParser,
};
use crate::normalize::{constraint_suffix, normalize};

/// The outcome of dispatching one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The template name is not a recognized constraint template; skipped.
    NotAConstraint,
    /// Recognized kind, but the declaration is incomplete; skipped.
    Incomplete(ConstraintKind),
    /// A fully parsed, datatype-validated constraint.
    Parsed(Constraint),
}

/// Routes each template to at most one constraint parser.
///
/// Receives its datatype registry at construction (the parsers share it);
/// dispatch is per-template and independent — nothing here carries state
/// between calls.
pub struct ConstraintDispatcher<'a> {
    registry: &'a dyn PropertyTypeRegistry,
}

impl<'a> ConstraintDispatcher<'a> {
    /// Creates a dispatcher over the given datatype registry.
    #[must_use]
    pub fn new(registry: &'a dyn PropertyTypeRegistry) -> Self {
        Self { registry }
    }

    /// Resolves a raw template name to its constraint kind, if any.
    #[must_use]
    pub fn kind_of(name: &str) -> Option<ConstraintKind> {
        let normalized = normalize(name);
        let suffix = constraint_suffix(&normalized)?;
        ConstraintKind::ALL
            .into_iter()
            .find(|kind| kind.template_suffix() == suffix)
    }

    /// Dispatches one template: name normalization, table lookup, parse.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] only for a recognized, complete, but invalid
    /// declaration; unrecognized and incomplete templates are `Ok` skips.
    pub fn dispatch(&self, template: &Template) -> Result<Dispatch, ParseError> {
        let Some(kind) = Self::kind_of(template.name()) else {
            return Ok(Dispatch::NotAConstraint);
        };
        match Self::parser_for(kind).parse(template, self.registry)? {
            Some(constraint) => Ok(Dispatch::Parsed(constraint)),
            None => Ok(Dispatch::Incomplete(kind)),
        }
    }

    fn parser_for(kind: ConstraintKind) -> &'static dyn ConstraintParser {
        match kind {
            ConstraintKind::OneOf => &OneOfParser,
            ConstraintKind::Format => &FormatParser,
            ConstraintKind::Range => &RangeParser,
            ConstraintKind::SingleValue => &SingleValueParser,
            ConstraintKind::UniqueValue => &UniqueValueParser,
            ConstraintKind::MultiValue => &MultiValueParser,
            ConstraintKind::Symmetric => &SymmetricParser,
            ConstraintKind::Inverse => &InverseParser,
            ConstraintKind::ConflictsWith => &ConflictsWithParser,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{Datatype, PropertyIdValue, SnapshotRegistry};

    #[test]
    fn lexical_variants_dispatch_to_the_same_parser() {
        for name in ["Constraint:One of", "constraint_one_of", "  Constraint : One of  "] {
            assert_eq!(
                ConstraintDispatcher::kind_of(name),
                Some(ConstraintKind::OneOf),
                "name '{}'",
                name
            );
        }
    }

    #[test]
    fn every_kind_has_a_routable_suffix() {
        for kind in ConstraintKind::ALL {
            let name = format!("Constraint:{}", kind.template_suffix());
            assert_eq!(ConstraintDispatcher::kind_of(&name), Some(kind));
        }
    }

    #[test]
    fn unrelated_templates_are_not_constraints() {
        for name in ["Infobox person", "Constraint", "Q", "constraint one off"] {
            assert_eq!(ConstraintDispatcher::kind_of(name), None, "name '{}'", name);
        }
    }

    #[test]
    fn dispatch_outcomes() {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P31").unwrap(), Datatype::Item);
        let dispatcher = ConstraintDispatcher::new(&reg);

        let unrelated = Template::new("Infobox person", Some("P31".to_owned()), vec![], "");
        assert_eq!(
            dispatcher.dispatch(&unrelated).unwrap(),
            Dispatch::NotAConstraint
        );

        let incomplete = Template::new("Constraint:One of", Some("P31".to_owned()), vec![], "");
        assert_eq!(
            dispatcher.dispatch(&incomplete).unwrap(),
            Dispatch::Incomplete(ConstraintKind::OneOf)
        );

        let complete = Template::new(
            "Constraint:One of",
            Some("P31".to_owned()),
            vec![("values".to_owned(), "Q5|Q6".to_owned())],
            "",
        );
        let Dispatch::Parsed(constraint) = dispatcher.dispatch(&complete).unwrap() else {
            unreachable!("expected a parsed constraint");
        };
        assert_eq!(constraint.kind(), ConstraintKind::OneOf);
    }
}
