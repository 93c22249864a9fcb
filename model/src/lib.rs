//! Wikidata property-constraint data model.
//!
//! The `wdc-model` crate provides the typed vocabulary shared by the parser,
//! renderer, and processor: entity identifiers, the property datatype
//! enumeration, wiki-template records, the closed [`Constraint`] variant set,
//! and the [`PropertyTypeRegistry`] lookup seam.
//!
//! # Entry Point
//!
//! ```
//! let p31 = wdc_model::PropertyIdValue::new("p31").unwrap();
//! assert_eq!(p31.id(), "P31");
//! assert_eq!(p31.iri(), "http://www.wikidata.org/entity/P31");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod constraint;
pub mod iris;
pub mod registry;
pub mod template;
pub mod value;

pub use constraint::{Constraint, ConstraintKind, OneOfValues};
pub use registry::{PropertyTypeRegistry, RegistryError, SnapshotRegistry};
pub use template::Template;
pub use value::{Datatype, ItemIdValue, PropertyIdValue, QuantityValue, ValueParseError};
