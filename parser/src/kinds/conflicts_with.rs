//! `Constraint:Conflicts with`: an entity using this property should not
//! also use any of the listed properties.

use wdc_model::{Constraint, PropertyTypeRegistry, Template};

use super::{datatype_of, params, subject, ConstraintParser};
use crate::error::ParseError;
use crate::list;

/// Parses `Constraint:Conflicts with` declarations. The `list` parameter
/// reuses the shared list grammar; applies to any datatype.
pub struct ConflictsWithParser;

impl ConstraintParser for ConflictsWithParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        let Some(list_text) = template.get(params::LIST) else {
            return Ok(None);
        };
        datatype_of(&property, registry)?;
        let tokens = list::split_list(list_text, list::DEFAULT_DELIMITERS);
        let mut properties = Vec::with_capacity(tokens.len());
        for token in tokens {
            let conflicting =
                list::property_token(token).ok_or_else(|| ParseError::InvalidValue {
                    property: property.clone(),
                    token: token.to_owned(),
                    expected: "a property reference",
                })?;
            properties.push(conflicting);
        }
        Ok(Some(Constraint::ConflictsWith {
            property,
            properties,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{Datatype, PropertyIdValue, SnapshotRegistry};

    #[test]
    fn property_list_preserves_source_order() {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P569").unwrap(), Datatype::Time);
        let template = Template::new(
            "Constraint:Conflicts with",
            Some("P569".to_owned()),
            vec![("list".to_owned(), "{{P|570}}, {{P|577}}".to_owned())],
            "",
        );
        let parsed = ConflictsWithParser.parse(&template, &reg).unwrap().unwrap();
        let Constraint::ConflictsWith { properties, .. } = parsed else {
            unreachable!("expected a conflicts-with constraint");
        };
        let ids: Vec<_> = properties.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["P570", "P577"]);
    }

    #[test]
    fn unregistered_property_is_rejected() {
        let reg = SnapshotRegistry::new();
        let template = Template::new(
            "Constraint:Conflicts with",
            Some("P999".to_owned()),
            vec![("list".to_owned(), "{{P|570}}".to_owned())],
            "",
        );
        let err = ConflictsWithParser.parse(&template, &reg).unwrap_err();
        assert!(matches!(err, ParseError::UnknownProperty { .. }));
    }
}
