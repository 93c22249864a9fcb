//! The renderer visitor: a total function over the constraint variant set.

use wdc_model::Constraint;

use crate::format::{RenderError, RendererFormat};

/// Renders constraints into a [`RendererFormat`] sink.
///
/// The match below is exhaustive with no catch-all arm: adding a constraint
/// kind without a rendering case is a compile failure. Rendering one
/// constraint has no dependency on, or effect on, any other.
pub struct ConstraintRenderer<'a> {
    sink: &'a mut dyn RendererFormat,
}

impl<'a> ConstraintRenderer<'a> {
    /// Creates a renderer over the given sink.
    #[must_use]
    pub fn new(sink: &'a mut dyn RendererFormat) -> Self {
        Self { sink }
    }

    /// Emits the axiom(s) for one constraint.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`RenderError`]: `Rejected` drops this one
    /// constraint, `Io` is fatal for the document.
    pub fn render(&mut self, constraint: &Constraint) -> Result<(), RenderError> {
        match constraint {
            Constraint::OneOf { property, values } => self.sink.one_of(property, values),
            Constraint::Format { property, pattern } => self.sink.format(property, pattern),
            Constraint::Range { property, min, max } => self.sink.range(property, min, max),
            Constraint::SingleValue { property } => self.sink.single_value(property),
            Constraint::UniqueValue { property } => self.sink.unique_value(property),
            Constraint::MultiValue { property } => self.sink.multi_value(property),
            Constraint::Symmetric { property } => self.sink.symmetric(property),
            Constraint::Inverse { property, inverse } => self.sink.inverse(property, inverse),
            Constraint::ConflictsWith {
                property,
                properties,
            } => self.sink.conflicts_with(property, properties),
        }
    }
}
