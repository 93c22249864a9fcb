//! `Constraint:Format`: string values must match a pattern.

use wdc_model::{Constraint, ConstraintKind, Datatype, PropertyTypeRegistry, Template};

use super::{datatype_of, params, subject, type_mismatch, ConstraintParser};
use crate::error::ParseError;

/// Parses `Constraint:Format` declarations.
///
/// Only meaningful over string-like datatypes; the pattern itself is kept
/// verbatim and never compiled here.
pub struct FormatParser;

impl ConstraintParser for FormatParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        let Some(pattern) = template.get(params::PATTERN) else {
            return Ok(None);
        };
        match datatype_of(&property, registry)? {
            Datatype::String | Datatype::ExternalId | Datatype::CommonsMedia | Datatype::Url => {
                Ok(Some(Constraint::Format {
                    property,
                    pattern: pattern.trim().to_owned(),
                }))
            }
            other => Err(type_mismatch(property, ConstraintKind::Format, other)),
        }
    }
}
