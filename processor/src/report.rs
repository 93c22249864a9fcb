//! Structured run report.
//!
//! Every template in a batch gets exactly one outcome entry; failures are
//! collected here instead of interleaved on standard output, and the report
//! serializes to JSON alongside the rendered documents.

use serde::Serialize;

/// What happened to one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail")]
pub enum Outcome {
    /// Parsed and emitted into the document.
    Rendered,
    /// Not a constraint template; skipped.
    NotAConstraint,
    /// Recognized constraint kind with an incomplete declaration; skipped.
    Incomplete,
    /// The declaration was present but invalid; dropped.
    ParseFailed(String),
    /// The sink rejected the constructed constraint; dropped.
    RenderFailed(String),
}

/// One template's processing record.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateOutcome {
    /// The property the template was declared for.
    pub property: String,
    /// The template name as written.
    pub template: String,
    /// The outcome.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Aggregated outcomes for one processed batch.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Per-template records in processing order.
    pub outcomes: Vec<TemplateOutcome>,
}

impl RunReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one template's outcome.
    pub fn record(
        &mut self,
        property: impl Into<String>,
        template: impl Into<String>,
        outcome: Outcome,
    ) {
        self.outcomes.push(TemplateOutcome {
            property: property.into(),
            template: template.into(),
            outcome,
        });
    }

    /// Number of constraints actually emitted.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Rendered))
    }

    /// Number of declarations dropped for parse or render failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::ParseFailed(_) | Outcome::RenderFailed(_)))
    }

    /// Number of skipped templates (unrecognized or incomplete).
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::NotAConstraint | Outcome::Incomplete))
    }

    /// One-line totals, for log output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} templates: {} rendered, {} skipped, {} failed",
            self.outcomes.len(),
            self.rendered_count(),
            self.skipped_count(),
            self.failure_count()
        )
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_summary() {
        let mut report = RunReport::new();
        report.record("P31", "Constraint:One of", Outcome::Rendered);
        report.record("P31", "Infobox", Outcome::NotAConstraint);
        report.record("P99", "Constraint:One of", Outcome::ParseFailed("bad".into()));
        assert_eq!(report.rendered_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.summary(), "3 templates: 1 rendered, 1 skipped, 1 failed");
    }

    #[test]
    fn serializes_to_json() {
        let mut report = RunReport::new();
        report.record("P31", "Constraint:One of", Outcome::Rendered);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"property\":\"P31\""));
        assert!(json.contains("\"outcome\":\"Rendered\""));
    }
}
