//! Constraint-template parsing.
//!
//! The `wdc-parser` crate turns raw wikitext into typed
//! [`Constraint`](wdc_model::Constraint) values: [`scanner`] extracts
//! `{{...}}` template invocations, [`normalize`] canonicalizes template
//! names, [`dispatcher`] routes each template to the parser for its
//! constraint kind, and [`kinds`] holds one parser per kind. Parsers are
//! pure: given a template and a datatype registry they either produce a
//! constraint, report the declaration incomplete, or fail with a
//! [`ParseError`] — without ever affecting another template's outcome.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod dispatcher;
pub mod error;
pub mod kinds;
pub mod list;
pub mod normalize;
pub mod scanner;

pub use dispatcher::{ConstraintDispatcher, Dispatch};
pub use error::ParseError;
pub use kinds::ConstraintParser;
pub use scanner::scan_templates;
