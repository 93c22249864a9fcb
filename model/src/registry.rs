//! Property datatype lookup.
//!
//! Parsers never infer a property's datatype from a template; they resolve it
//! through this seam. The production implementation is a snapshot loaded from
//! JSON (`{"P31": "wikibase-item", ...}`); tests build registries in code.

use std::collections::HashMap;

use crate::value::{Datatype, PropertyIdValue};

/// Resolves a property identifier to its declared datatype.
pub trait PropertyTypeRegistry {
    /// The declared datatype, or `None` if the property is unknown.
    fn datatype(&self, property: &PropertyIdValue) -> Option<Datatype>;
}

/// Error when loading a datatype snapshot.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The snapshot file is not a JSON object of strings.
    #[error("malformed datatype snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A property key in the snapshot is not a valid property id.
    #[error("snapshot key '{0}' is not a property identifier")]
    BadPropertyId(String),
    /// A datatype name in the snapshot is not recognized.
    #[error("unknown datatype name '{datatype}' for property {property}")]
    UnknownDatatype {
        /// The snapshot key.
        property: String,
        /// The unrecognized datatype name.
        datatype: String,
    },
}

/// An in-memory datatype registry built from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    types: HashMap<PropertyIdValue, Datatype>,
}

impl SnapshotRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a registry from snapshot JSON mapping property id to wikibase
    /// datatype name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the JSON is malformed, a key is not a
    /// property id, or a datatype name is unrecognized.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut types = HashMap::with_capacity(raw.len());
        for (key, name) in raw {
            let property = PropertyIdValue::new(&key)
                .map_err(|_| RegistryError::BadPropertyId(key.clone()))?;
            let datatype =
                Datatype::from_name(&name).ok_or_else(|| RegistryError::UnknownDatatype {
                    property: key,
                    datatype: name,
                })?;
            types.insert(property, datatype);
        }
        Ok(Self { types })
    }

    /// Registers one property's datatype. Replaces any previous entry.
    pub fn insert(&mut self, property: PropertyIdValue, datatype: Datatype) {
        self.types.insert(property, datatype);
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl PropertyTypeRegistry for SnapshotRegistry {
    fn datatype(&self, property: &PropertyIdValue) -> Option<Datatype> {
        self.types.get(property).copied()
    }
}
