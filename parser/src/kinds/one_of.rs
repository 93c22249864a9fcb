//! `Constraint:One of`: the property's value must belong to an explicitly
//! enumerated list of items or quantities.

use wdc_model::{
    Constraint, ConstraintKind, Datatype, OneOfValues, PropertyTypeRegistry, Template,
};

use super::{datatype_of, params, subject, type_mismatch, ConstraintParser};
use crate::error::ParseError;
use crate::list;

/// Parses `Constraint:One of` declarations.
///
/// The payload form follows the property's declared datatype: item
/// identifiers for `wikibase-item`, quantity values for `quantity`. Any
/// other datatype is a hard failure — an enumeration over a non-enumerable
/// domain would mask a data-quality problem in the source wiki.
pub struct OneOfParser;

impl ConstraintParser for OneOfParser {
    fn parse(
        &self,
        template: &Template,
        registry: &dyn PropertyTypeRegistry,
    ) -> Result<Option<Constraint>, ParseError> {
        let Some(property) = subject(template)? else {
            return Ok(None);
        };
        let Some(values) = template.get(params::VALUES) else {
            return Ok(None);
        };
        let datatype = datatype_of(&property, registry)?;
        let tokens = list::split_list(values, list::DEFAULT_DELIMITERS);
        let values = match datatype {
            Datatype::Item => {
                let mut items = Vec::with_capacity(tokens.len());
                for token in tokens {
                    let item = list::item_token(token).ok_or_else(|| ParseError::InvalidValue {
                        property: property.clone(),
                        token: token.to_owned(),
                        expected: "an item reference",
                    })?;
                    items.push(item);
                }
                OneOfValues::Items { items }
            }
            Datatype::Quantity => {
                let mut quantities = Vec::with_capacity(tokens.len());
                for token in tokens {
                    let quantity =
                        list::quantity_token(token).ok_or_else(|| ParseError::InvalidValue {
                            property: property.clone(),
                            token: token.to_owned(),
                            expected: "a decimal quantity",
                        })?;
                    quantities.push(quantity);
                }
                OneOfValues::Quantities { quantities }
            }
            other => return Err(type_mismatch(property, ConstraintKind::OneOf, other)),
        };
        Ok(Some(Constraint::OneOf { property, values }))
    }
}
