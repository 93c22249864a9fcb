//! `Constraint:Inverse`: if `a → b` holds over this property then `b → a`
//! holds over the declared inverse property.

use wdc_model::{Constraint, ConstraintKind, Datatype, PropertyTypeRegistry, Template};

use super::{datatype_of, params, subject, type_mismatch, ConstraintParser};
use crate::error::ParseError;
use crate::list;

/// Parses `Constraint:Inverse` declarations. The `property` parameter names
/// the inverse and accepts the same reference forms as property list tokens.
pub struct InverseParser;

impl ConstraintParser for InverseParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        let Some(inverse_text) = template.get(params::PROPERTY) else {
            return Ok(None);
        };
        match datatype_of(&property, registry)? {
            Datatype::Item => {
                let inverse =
                    list::property_token(inverse_text).ok_or_else(|| ParseError::InvalidValue {
                        property: property.clone(),
                        token: inverse_text.trim().to_owned(),
                        expected: "a property reference",
                    })?;
                Ok(Some(Constraint::Inverse { property, inverse }))
            }
            other => Err(type_mismatch(property, ConstraintKind::Inverse, other)),
        }
    }
}
