//! `Constraint:Range`: quantity or time values must fall within an
//! inclusive `min`..`max` range.

use wdc_model::{Constraint, ConstraintKind, Datatype, PropertyTypeRegistry, Template};

use super::{datatype_of, params, subject, type_mismatch, ConstraintParser};
use crate::error::ParseError;

/// Parses `Constraint:Range` declarations. Both bounds are required; they
/// are kept in lexical form (decimal for quantities, year or date text for
/// times).
pub struct RangeParser;

impl ConstraintParser for RangeParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        let (Some(min), Some(max)) = (template.get(params::MIN), template.get(params::MAX)) else {
            return Ok(None);
        };
        match datatype_of(&property, registry)? {
            Datatype::Quantity | Datatype::Time => Ok(Some(Constraint::Range {
                property,
                min: min.trim().to_owned(),
                max: max.trim().to_owned(),
            })),
            other => Err(type_mismatch(property, ConstraintKind::Range, other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{PropertyIdValue, SnapshotRegistry};

    fn template(params: Vec<(String, String)>) -> Template {
        Template::new("Constraint:Range", Some("P1082".to_owned()), params, "")
    }

    #[test]
    fn both_bounds_required() {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P1082").unwrap(), Datatype::Quantity);
        let incomplete = template(vec![("min".to_owned(), "0".to_owned())]);
        assert_eq!(RangeParser.parse(&incomplete, &reg).unwrap(), None);

        let complete = template(vec![
            ("min".to_owned(), "0".to_owned()),
            ("max".to_owned(), "8000000000".to_owned()),
        ]);
        let parsed = RangeParser.parse(&complete, &reg).unwrap().unwrap();
        let Constraint::Range { min, max, .. } = parsed else {
            unreachable!("expected a range constraint");
        };
        assert_eq!((min.as_str(), max.as_str()), ("0", "8000000000"));
    }

    #[test]
    fn string_property_is_a_mismatch() {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P1082").unwrap(), Datatype::String);
        let complete = template(vec![
            ("min".to_owned(), "0".to_owned()),
            ("max".to_owned(), "1".to_owned()),
        ]);
        let err = RangeParser.parse(&complete, &reg).unwrap_err();
        assert!(err.to_string().contains("P1082"));
    }
}
