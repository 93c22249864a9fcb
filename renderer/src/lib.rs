//! Constraint rendering.
//!
//! The `wdc-renderer` crate turns validated
//! [`Constraint`](wdc_model::Constraint) values into formal axioms:
//! [`format`] defines the [`RendererFormat`] sink contract and its two
//! implementations (OWL 2 functional syntax and RDF/XML), and [`visitor`]
//! holds the exhaustive per-variant renderer. Both sinks are deterministic
//! projections of the same constraint sequence: the same enumerated values
//! in the same order.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod format;
pub mod visitor;

pub use format::{Owl2FunctionalFormat, RdfXmlFormat, RenderError, RendererFormat};
pub use visitor::ConstraintRenderer;
