//! `Constraint:Symmetric`: if `a → b` holds over the property then so does
//! `b → a`. Only meaningful for item-valued properties.

use wdc_model::{Constraint, ConstraintKind, Datatype, PropertyTypeRegistry, Template};

use super::{datatype_of, subject, type_mismatch, ConstraintParser};
use crate::error::ParseError;

/// Parses `Constraint:Symmetric` declarations.
pub struct SymmetricParser;

impl ConstraintParser for SymmetricParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        match datatype_of(&property, registry)? {
            Datatype::Item => Ok(Some(Constraint::Symmetric { property })),
            other => Err(type_mismatch(property, ConstraintKind::Symmetric, other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{PropertyIdValue, SnapshotRegistry};

    #[test]
    fn requires_item_datatype() {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P26").unwrap(), Datatype::Item);
        reg.insert(PropertyIdValue::new("P213").unwrap(), Datatype::ExternalId);

        let spouse = Template::new("Constraint:Symmetric", Some("P26".to_owned()), vec![], "");
        assert!(SymmetricParser.parse(&spouse, &reg).unwrap().is_some());

        let isni = Template::new("Constraint:Symmetric", Some("P213".to_owned()), vec![], "");
        let err = SymmetricParser.parse(&isni, &reg).unwrap_err();
        assert!(matches!(err, ParseError::TypeMismatch { .. }));
    }
}
