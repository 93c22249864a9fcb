//! Entity identifiers, quantity values, and the property datatype enumeration.
//!
//! Identifiers are canonicalized at construction time: `p31` and `P31` denote
//! the same property. Equality is by canonical identifier, so interning is
//! unnecessary.

use std::fmt;

use crate::iris;

/// Error when parsing an identifier or quantity from source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueParseError {
    /// The text is not a well-formed property identifier (`P` + digits).
    #[error("invalid property identifier '{0}'")]
    InvalidPropertyId(String),
    /// The text is not a well-formed item identifier (`Q` + digits).
    #[error("invalid item identifier '{0}'")]
    InvalidItemId(String),
    /// The text is not a well-formed decimal quantity.
    #[error("invalid quantity value '{0}'")]
    InvalidQuantity(String),
}

fn is_entity_id(s: &str, prefix: char) -> bool {
    let mut chars = s.chars();
    chars.next() == Some(prefix)
        && !s[1..].is_empty()
        && !s[1..].starts_with('0')
        && s[1..].bytes().all(|b| b.is_ascii_digit())
}

/// Canonical identifier of a Wikidata property (e.g. `P31`).
///
/// Equality is by canonical (uppercase) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyIdValue {
    id: String,
}

impl PropertyIdValue {
    /// Parses a property identifier, folding case to the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ValueParseError::InvalidPropertyId`] if the trimmed text is
    /// not `P` (case-insensitive) followed by a nonzero-leading digit run.
    pub fn new(id: &str) -> Result<Self, ValueParseError> {
        let canonical = id.trim().to_ascii_uppercase();
        if is_entity_id(&canonical, 'P') {
            Ok(Self { id: canonical })
        } else {
            Err(ValueParseError::InvalidPropertyId(id.to_owned()))
        }
    }

    /// The canonical identifier, e.g. `P31`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The full entity IRI, e.g. `http://www.wikidata.org/entity/P31`.
    #[must_use]
    pub fn iri(&self) -> String {
        format!("{}{}", iris::WIKIDATA_ENTITY, self.id)
    }
}

impl fmt::Display for PropertyIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Canonical identifier of a Wikidata item (e.g. `Q5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemIdValue {
    id: String,
}

impl ItemIdValue {
    /// Parses an item identifier, folding case to the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ValueParseError::InvalidItemId`] if the trimmed text is not
    /// `Q` (case-insensitive) followed by a nonzero-leading digit run.
    pub fn new(id: &str) -> Result<Self, ValueParseError> {
        let canonical = id.trim().to_ascii_uppercase();
        if is_entity_id(&canonical, 'Q') {
            Ok(Self { id: canonical })
        } else {
            Err(ValueParseError::InvalidItemId(id.to_owned()))
        }
    }

    /// The canonical identifier, e.g. `Q5`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The full entity IRI, e.g. `http://www.wikidata.org/entity/Q5`.
    #[must_use]
    pub fn iri(&self) -> String {
        format!("{}{}", iris::WIKIDATA_ENTITY, self.id)
    }
}

impl fmt::Display for ItemIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// An exact decimal quantity, kept in its normalized lexical form.
///
/// The lexical form is what gets emitted as an `xsd:decimal` literal, so no
/// floating-point round-trip ever touches the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuantityValue {
    lexical: String,
}

impl QuantityValue {
    /// Parses a decimal quantity token such as `7`, `-3`, or `2.50`.
    ///
    /// A leading `+` is dropped; the digits are otherwise kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ValueParseError::InvalidQuantity`] if the trimmed text is
    /// not an optionally signed decimal number.
    pub fn new(token: &str) -> Result<Self, ValueParseError> {
        let trimmed = token.trim();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        let well_formed = match unsigned.split_once('.') {
            None => !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()),
            Some((int, frac)) => {
                !int.is_empty()
                    && !frac.is_empty()
                    && int.bytes().all(|b| b.is_ascii_digit())
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
        };
        if well_formed {
            Ok(Self {
                lexical: trimmed.strip_prefix('+').unwrap_or(trimmed).to_owned(),
            })
        } else {
            Err(ValueParseError::InvalidQuantity(token.to_owned()))
        }
    }

    /// The normalized lexical form, suitable as an `xsd:decimal` literal.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical)
    }
}

/// The value-domain classification of a Wikidata property.
///
/// A property's datatype is resolved only through a
/// [`PropertyTypeRegistry`](crate::registry::PropertyTypeRegistry) lookup,
/// never inferred from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// `wikibase-item`: values are items.
    Item,
    /// `wikibase-property`: values are properties.
    Property,
    /// `string`: plain string values.
    String,
    /// `url`: URL values.
    Url,
    /// `commonsMedia`: Wikimedia Commons file names.
    CommonsMedia,
    /// `external-id`: external identifier strings.
    ExternalId,
    /// `quantity`: decimal quantities.
    Quantity,
    /// `time`: calendar timestamps.
    Time,
    /// `globe-coordinate`: geographic coordinates.
    GlobeCoordinate,
    /// `monolingualtext`: language-tagged strings.
    MonolingualText,
}

impl Datatype {
    /// Resolves a wikibase datatype name (e.g. `wikibase-item`) as used in
    /// property snapshots. Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wikibase-item" => Some(Self::Item),
            "wikibase-property" => Some(Self::Property),
            "string" => Some(Self::String),
            "url" => Some(Self::Url),
            "commonsMedia" => Some(Self::CommonsMedia),
            "external-id" => Some(Self::ExternalId),
            "quantity" => Some(Self::Quantity),
            "time" => Some(Self::Time),
            "globe-coordinate" => Some(Self::GlobeCoordinate),
            "monolingualtext" => Some(Self::MonolingualText),
            _ => None,
        }
    }

    /// The wikibase datatype name, the inverse of [`Datatype::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Item => "wikibase-item",
            Self::Property => "wikibase-property",
            Self::String => "string",
            Self::Url => "url",
            Self::CommonsMedia => "commonsMedia",
            Self::ExternalId => "external-id",
            Self::Quantity => "quantity",
            Self::Time => "time",
            Self::GlobeCoordinate => "globe-coordinate",
            Self::MonolingualText => "monolingualtext",
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn property_id_folds_case() {
        let p = PropertyIdValue::new("p31").unwrap();
        assert_eq!(p.id(), "P31");
        assert_eq!(p, PropertyIdValue::new(" P31 ").unwrap());
        assert_eq!(p.iri(), "http://www.wikidata.org/entity/P31");
    }

    #[test]
    fn malformed_property_ids_rejected() {
        for bad in ["P0", "P", "Q5", "P3x", "31", ""] {
            assert!(PropertyIdValue::new(bad).is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn item_id_folds_case() {
        let q = ItemIdValue::new("q5").unwrap();
        assert_eq!(q.id(), "Q5");
        assert_eq!(q.iri(), "http://www.wikidata.org/entity/Q5");
    }

    #[test]
    fn quantity_lexical_forms() {
        assert_eq!(QuantityValue::new("7").unwrap().lexical(), "7");
        assert_eq!(QuantityValue::new("+7").unwrap().lexical(), "7");
        assert_eq!(QuantityValue::new("-3").unwrap().lexical(), "-3");
        assert_eq!(QuantityValue::new(" 2.50 ").unwrap().lexical(), "2.50");
        assert!(QuantityValue::new("2.").is_err());
        assert!(QuantityValue::new("five").is_err());
        assert!(QuantityValue::new("").is_err());
    }

    #[test]
    fn datatype_names_round_trip() {
        for dt in [
            Datatype::Item,
            Datatype::Property,
            Datatype::String,
            Datatype::Url,
            Datatype::CommonsMedia,
            Datatype::ExternalId,
            Datatype::Quantity,
            Datatype::Time,
            Datatype::GlobeCoordinate,
            Datatype::MonolingualText,
        ] {
            assert_eq!(Datatype::from_name(dt.name()), Some(dt));
        }
        assert_eq!(Datatype::from_name("tabular-data"), None);
    }
}
