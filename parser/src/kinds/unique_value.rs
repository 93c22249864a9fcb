//! `Constraint:Unique value`: no two entities should share a value for the
//! property. Valueless; applies to any datatype.

use wdc_model::{Constraint, PropertyTypeRegistry, Template};

use super::{datatype_of, subject, ConstraintParser};
use crate::error::ParseError;

/// Parses `Constraint:Unique value` declarations.
pub struct UniqueValueParser;

impl ConstraintParser for UniqueValueParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        datatype_of(&property, registry)?;
        Ok(Some(Constraint::UniqueValue { property }))
    }
}
