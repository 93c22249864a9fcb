//! Batch processing of property-constraint templates.
//!
//! Drives the pipeline over a finite, pre-materialized batch grouped by
//! property: for each template, dispatch → parse → render, with each step in
//! its own failure boundary so one malformed declaration costs exactly that
//! declaration. The whole pass is single-threaded and synchronous; the only
//! failures that abort a document are sink I/O failures.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;

pub use report::{Outcome, RunReport, TemplateOutcome};

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use wdc_model::{PropertyIdValue, PropertyTypeRegistry, Template};
use wdc_parser::dispatcher::{ConstraintDispatcher, Dispatch};
use wdc_parser::normalize;
use wdc_renderer::format::{RenderError, RendererFormat};
use wdc_renderer::visitor::ConstraintRenderer;

/// A processing batch: property id → ordered templates from its talk page.
pub type TemplateBatch = BTreeMap<String, Vec<Template>>;

/// A fatal processing failure. Per-template failures never surface here;
/// they are recorded in the [`RunReport`] and the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The sink could not be written; the document is aborted.
    #[error("sink I/O failure: {0}")]
    SinkIo(#[source] std::io::Error),
}

/// Escapes free text for annotation comments: `&`→`&amp;`, `"`→`&quot;`,
/// `<`→`&lt;`, `'`→`&apos;`, newline→two spaces.
#[must_use]
pub fn escape_chars(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('\'', "&apos;")
        .replace('\n', "  ")
}

/// The batch pipeline: dispatch, parse, and render with per-template
/// failure isolation.
///
/// Collaborators are injected at construction; the processor never builds a
/// registry or sink of its own.
pub struct Processor<'a> {
    registry: &'a dyn PropertyTypeRegistry,
}

impl<'a> Processor<'a> {
    /// Creates a processor over the given datatype registry.
    #[must_use]
    pub fn new(registry: &'a dyn PropertyTypeRegistry) -> Self {
        Self { registry }
    }

    /// Processes one batch into one document.
    ///
    /// Emits `start`, then per property one annotation comment carrying the
    /// raw text of its constraint templates followed by one axiom per
    /// successfully parsed constraint, then `finish`. Every per-template
    /// failure is logged, recorded, and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::SinkIo`] only when the sink itself fails;
    /// the document is then aborted.
    pub fn process(
        &self,
        batch: &TemplateBatch,
        sink: &mut dyn RendererFormat,
    ) -> Result<RunReport, ProcessError> {
        let mut report = RunReport::new();
        let dispatcher = ConstraintDispatcher::new(self.registry);

        sink.start().map_err(fatal)?;
        for (key, templates) in batch {
            let Ok(property) = PropertyIdValue::new(key) else {
                warn!(property = %key, "batch key is not a property identifier, skipping group");
                continue;
            };
            self.annotate(&property, templates, sink)?;
            for template in templates {
                let subject = template.clone().with_page(property.id());
                match dispatcher.dispatch(&subject) {
                    Ok(Dispatch::NotAConstraint) => {
                        report.record(property.id(), template.name(), Outcome::NotAConstraint);
                    }
                    Ok(Dispatch::Incomplete(kind)) => {
                        debug!(property = %property, kind = %kind, "incomplete declaration skipped");
                        report.record(property.id(), template.name(), Outcome::Incomplete);
                    }
                    Ok(Dispatch::Parsed(constraint)) => {
                        match ConstraintRenderer::new(sink).render(&constraint) {
                            Ok(()) => {
                                report.record(property.id(), template.name(), Outcome::Rendered);
                            }
                            Err(RenderError::Rejected(reason)) => {
                                warn!(property = %property, %reason, "constraint rejected by sink");
                                report.record(
                                    property.id(),
                                    template.name(),
                                    Outcome::RenderFailed(reason),
                                );
                            }
                            Err(RenderError::Io(io)) => return Err(ProcessError::SinkIo(io)),
                        }
                    }
                    Err(parse_error) => {
                        warn!(property = %property, error = %parse_error, "declaration dropped");
                        report.record(
                            property.id(),
                            template.name(),
                            Outcome::ParseFailed(parse_error.to_string()),
                        );
                    }
                }
            }
        }
        sink.finish().map_err(fatal)?;

        info!("{}", report.summary());
        Ok(report)
    }

    /// Emits one annotation comment carrying the raw wikitext of the
    /// property's constraint templates. Properties with no constraint
    /// templates get no comment.
    fn annotate(
        &self,
        property: &PropertyIdValue,
        templates: &[Template],
        sink: &mut dyn RendererFormat,
    ) -> Result<(), ProcessError> {
        let raw: Vec<&str> = templates
            .iter()
            .filter(|t| {
                normalize::constraint_suffix(&normalize::normalize(t.name())).is_some()
            })
            .map(Template::raw)
            .filter(|r| !r.is_empty())
            .collect();
        if raw.is_empty() {
            return Ok(());
        }
        match sink.annotation_comment(property, &escape_chars(&raw.join("\n"))) {
            Ok(()) => Ok(()),
            Err(RenderError::Rejected(reason)) => {
                warn!(property = %property, %reason, "annotation comment rejected");
                Ok(())
            }
            Err(RenderError::Io(io)) => Err(ProcessError::SinkIo(io)),
        }
    }
}

fn fatal(error: RenderError) -> ProcessError {
    match error {
        RenderError::Io(io) => ProcessError::SinkIo(io),
        RenderError::Rejected(reason) => {
            // start/finish never reject; treat a misbehaving sink as I/O.
            ProcessError::SinkIo(std::io::Error::other(reason))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wdc_model::{Datatype, SnapshotRegistry};
    use wdc_renderer::format::{Owl2FunctionalFormat, RdfXmlFormat};

    fn registry() -> SnapshotRegistry {
        let mut reg = SnapshotRegistry::new();
        reg.insert(PropertyIdValue::new("P31").unwrap(), Datatype::Item);
        reg.insert(PropertyIdValue::new("P99").unwrap(), Datatype::Time);
        reg
    }

    fn one_of(page: &str, values: &str) -> Template {
        let raw = format!("{{{{Constraint:One of|values={}}}}}", values);
        Template::new(
            "Constraint:One of",
            Some(page.to_owned()),
            vec![("values".to_owned(), values.to_owned())],
            raw,
        )
    }

    #[test]
    fn escape_table() {
        assert_eq!(
            escape_chars("a&b \"c\" <d> 'e'\nf"),
            "a&amp;b &quot;c&quot; &lt;d> &apos;e&apos;  f"
        );
    }

    #[test]
    fn malformed_template_does_not_block_well_formed_one() {
        let reg = registry();
        let mut batch = TemplateBatch::new();
        batch.insert("P31".to_owned(), vec![one_of("P31", "Q5|Q6")]);
        batch.insert("P99".to_owned(), vec![one_of("P99", "Q7")]);

        let mut sink = Owl2FunctionalFormat::new(Vec::new());
        let report = Processor::new(&reg).process(&batch, &mut sink).unwrap();
        let doc = String::from_utf8(sink.into_inner()).unwrap();

        assert_eq!(report.rendered_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            doc.matches("ObjectOneOf(").count(),
            1,
            "exactly one enumeration axiom"
        );
        assert!(doc.contains("entity/Q5> <http://www.wikidata.org/entity/Q6"));
        let failed = report
            .outcomes
            .iter()
            .find(|o| o.property == "P99")
            .unwrap();
        let Outcome::ParseFailed(message) = &failed.outcome else {
            unreachable!("expected a parse failure for P99");
        };
        assert!(message.contains("P99"));
        assert!(message.contains("time"));
    }

    #[test]
    fn rdf_sink_encodes_the_same_batch() {
        let reg = registry();
        let mut batch = TemplateBatch::new();
        batch.insert("P31".to_owned(), vec![one_of("P31", "Q5|Q6")]);

        let mut sink = RdfXmlFormat::new(Vec::new());
        let report = Processor::new(&reg).process(&batch, &mut sink).unwrap();
        let doc = String::from_utf8(sink.into_inner()).unwrap();

        assert_eq!(report.rendered_count(), 1);
        let q5 = doc.find("entity/Q5").unwrap();
        let q6 = doc.find("entity/Q6").unwrap();
        assert!(q5 < q6);
    }

    #[test]
    fn annotation_comment_carries_escaped_raw_text() {
        let reg = registry();
        let mut batch = TemplateBatch::new();
        batch.insert("P31".to_owned(), vec![one_of("P31", "Q5")]);

        let mut sink = Owl2FunctionalFormat::new(Vec::new());
        Processor::new(&reg).process(&batch, &mut sink).unwrap();
        let doc = String::from_utf8(sink.into_inner()).unwrap();
        assert!(doc.contains("AnnotationAssertion("));
        assert!(doc.contains("Constraint:One of|values=Q5"));
    }

    #[test]
    fn unrelated_templates_are_skipped_not_failed() {
        let reg = registry();
        let mut batch = TemplateBatch::new();
        batch.insert(
            "P31".to_owned(),
            vec![Template::new("Infobox person", None, vec![], "{{Infobox person}}")],
        );
        let mut sink = Owl2FunctionalFormat::new(Vec::new());
        let report = Processor::new(&reg).process(&batch, &mut sink).unwrap();
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failure_count(), 0);
        let doc = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!doc.contains("AnnotationAssertion("));
    }

    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn sink_io_failure_is_fatal() {
        let reg = registry();
        let batch = TemplateBatch::new();
        let mut sink = Owl2FunctionalFormat::new(FailingWriter);
        let err = Processor::new(&reg).process(&batch, &mut sink).unwrap_err();
        assert!(matches!(err, ProcessError::SinkIo(_)));
    }
}
