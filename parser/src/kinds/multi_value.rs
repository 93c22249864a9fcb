//! `Constraint:Multi value`: an entity is expected to carry more than one
//! value for the property. Valueless; applies to any datatype.

use wdc_model::{Constraint, PropertyTypeRegistry, Template};

use super::{datatype_of, subject, ConstraintParser};
use crate::error::ParseError;

/// Parses `Constraint:Multi value` declarations.
pub struct MultiValueParser;

impl ConstraintParser for MultiValueParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        datatype_of(&property, registry)?;
        Ok(Some(Constraint::MultiValue { property }))
    }
}
