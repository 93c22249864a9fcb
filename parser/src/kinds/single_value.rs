//! `Constraint:Single value`: an entity should carry at most one value for
//! the property. Valueless; applies to any datatype.

use wdc_model::{Constraint, PropertyTypeRegistry, Template};

use super::{datatype_of, subject, ConstraintParser};
use crate::error::ParseError;

/// Parses `Constraint:Single value` declarations.
pub struct SingleValueParser;

impl ConstraintParser for SingleValueParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        // Any datatype is acceptable, but the property must be registered.
        datatype_of(&property, registry)?;
        Ok(Some(Constraint::SingleValue { property }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{Datatype, PropertyIdValue, SnapshotRegistry};

    #[test]
    fn page_alone_suffices() {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P569").unwrap(), Datatype::Time);
        let template = Template::new("Constraint:Single value", Some("P569".to_owned()), vec![], "");
        let parsed = SingleValueParser.parse(&template, &reg).unwrap().unwrap();
        assert_eq!(parsed.property().id(), "P569");

        let no_page = Template::new("Constraint:Single value", None, vec![], "");
        assert_eq!(SingleValueParser.parse(&no_page, &reg).unwrap(), None);
    }

    #[test]
    fn unregistered_property_is_rejected() {
        let reg = SnapshotRegistry::new();
        let template = Template::new("Constraint:Single value", Some("P999".to_owned()), vec![], "");
        let err = SingleValueParser.parse(&template, &reg).unwrap_err();
        assert!(matches!(err, ParseError::UnknownProperty { .. }));
    }
}
