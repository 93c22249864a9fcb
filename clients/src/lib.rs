//! Pipeline assembly for the `wdc-extract` binary.
//!
//! Loads the two JSON inputs (talk-page wikitext per property, datatype
//! snapshot per property), scans the wikitext into template batches, and
//! runs the processor once per output format. The two format runs are
//! independent: a fatal failure on one side never prevents the attempt on
//! the other.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::error;
use wdc_model::{PropertyTypeRegistry, SnapshotRegistry};
use wdc_parser::scan_templates;
use wdc_processor::{Processor, RunReport, TemplateBatch};
use wdc_renderer::format::{Owl2FunctionalFormat, RdfXmlFormat};

/// File extension of the OWL 2 functional-syntax document.
pub const OWL_EXTENSION: &str = "owl";
/// File extension of the RDF/XML document.
pub const RDF_EXTENSION: &str = "rdf";
/// File extension of the JSON run report.
pub const REPORT_EXTENSION: &str = "report.json";

/// Inputs and outputs of one extraction run.
pub struct ExtractPaths {
    /// JSON object: property id → raw talk-page wikitext.
    pub talk: PathBuf,
    /// JSON object: property id → wikibase datatype name.
    pub types: PathBuf,
    /// Output directory.
    pub out: PathBuf,
    /// Base name of the output files.
    pub name: String,
}

/// Loads the datatype snapshot into a registry.
///
/// # Errors
///
/// Fails if the file cannot be read or the snapshot is malformed.
pub fn load_registry(path: &Path) -> Result<SnapshotRegistry> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read datatype snapshot {}", path.display()))?;
    SnapshotRegistry::from_json(&json)
        .with_context(|| format!("Malformed datatype snapshot {}", path.display()))
}

/// Loads the talk-page file and scans each property's wikitext into its
/// ordered template sequence.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a JSON object of strings.
pub fn load_batch(path: &Path) -> Result<TemplateBatch> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read talk-page file {}", path.display()))?;
    let pages: BTreeMap<String, String> = serde_json::from_str(&json)
        .with_context(|| format!("Malformed talk-page file {}", path.display()))?;
    Ok(pages
        .into_iter()
        .map(|(property, text)| (property, scan_templates(&text)))
        .collect())
}

/// Runs the processor once per output format and writes the documents plus
/// the JSON run report. Returns the number of formats that failed (0–2).
///
/// # Errors
///
/// Fails only on input loading; per-format failures are logged and counted,
/// never propagated, so one format's failure cannot suppress the other's
/// attempt.
pub fn run(paths: &ExtractPaths) -> Result<usize> {
    let registry = load_registry(&paths.types)?;
    let batch = load_batch(&paths.talk)?;
    fs::create_dir_all(&paths.out)
        .with_context(|| format!("Failed to create output directory {}", paths.out.display()))?;

    let mut failures = 0usize;
    let mut last_report: Option<RunReport> = None;

    match write_owl(&batch, &registry, &document_path(paths, OWL_EXTENSION)) {
        Ok(report) => last_report = Some(report),
        Err(error) => {
            failures += 1;
            error!("OWL 2 functional rendering failed: {:#}", error);
        }
    }
    match write_rdf(&batch, &registry, &document_path(paths, RDF_EXTENSION)) {
        Ok(report) => last_report = Some(report),
        Err(error) => {
            failures += 1;
            error!("RDF/XML rendering failed: {:#}", error);
        }
    }

    if let Some(report) = last_report {
        let report_path = document_path(paths, REPORT_EXTENSION);
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize the run report")?;
        fs::write(&report_path, json)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        println!("{}", report.summary());
    }

    Ok(failures)
}

/// Renders the batch as an OWL 2 functional-syntax document.
///
/// # Errors
///
/// Fails if the file cannot be created or the sink reports an I/O failure.
pub fn write_owl(
    batch: &TemplateBatch,
    registry: &dyn PropertyTypeRegistry,
    path: &Path,
) -> Result<RunReport> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut sink = Owl2FunctionalFormat::new(BufWriter::new(file));
    let report = Processor::new(registry).process(batch, &mut sink)?;
    println!("  Written: {}", path.display());
    Ok(report)
}

/// Renders the batch as an RDF/XML document.
///
/// # Errors
///
/// Fails if the file cannot be created or the sink reports an I/O failure.
pub fn write_rdf(
    batch: &TemplateBatch,
    registry: &dyn PropertyTypeRegistry,
    path: &Path,
) -> Result<RunReport> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut sink = RdfXmlFormat::new(BufWriter::new(file));
    let report = Processor::new(registry).process(batch, &mut sink)?;
    println!("  Written: {}", path.display());
    Ok(report)
}

fn document_path(paths: &ExtractPaths, extension: &str) -> PathBuf {
    paths.out.join(format!("{}.{}", paths.name, extension))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_over_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let talk = dir.path().join("talk.json");
        let types = dir.path().join("types.json");
        fs::write(
            &talk,
            r#"{"P31": "{{Constraint:One of|values={{Q|5}}, {{Q|6}}}}", "P99": "{{Constraint:One of|values=Q7}}"}"#,
        )
        .unwrap();
        fs::write(&types, r#"{"P31": "wikibase-item", "P99": "time"}"#).unwrap();

        let paths = ExtractPaths {
            talk,
            types,
            out: dir.path().join("out"),
            name: "constraints".to_owned(),
        };
        let failures = run(&paths).unwrap();
        assert_eq!(failures, 0);

        let owl = fs::read_to_string(paths.out.join("constraints.owl")).unwrap();
        assert!(owl.contains("ObjectOneOf( <http://www.wikidata.org/entity/Q5> <http://www.wikidata.org/entity/Q6> )"));

        let rdf = fs::read_to_string(paths.out.join("constraints.rdf")).unwrap();
        assert!(rdf.contains("entity/Q5"));

        let report = fs::read_to_string(paths.out.join("constraints.report.json")).unwrap();
        assert!(report.contains("ParseFailed"));
    }

    #[test]
    fn one_format_failing_leaves_the_other_written() {
        let dir = tempfile::tempdir().unwrap();
        let talk = dir.path().join("talk.json");
        let types = dir.path().join("types.json");
        fs::write(&talk, r#"{"P31": "{{Constraint:One of|values=Q5}}"}"#).unwrap();
        fs::write(&types, r#"{"P31": "wikibase-item"}"#).unwrap();

        let out = dir.path().join("out");
        // A directory squatting on the .owl path makes that format's file
        // creation fail while leaving the .rdf path untouched.
        fs::create_dir_all(out.join("constraints.owl")).unwrap();

        let paths = ExtractPaths {
            talk,
            types,
            out,
            name: "constraints".to_owned(),
        };
        let failures = run(&paths).unwrap();
        assert_eq!(failures, 1);

        let rdf = fs::read_to_string(paths.out.join("constraints.rdf")).unwrap();
        assert!(rdf.contains("entity/Q5"));
        let report = fs::read_to_string(paths.out.join("constraints.report.json")).unwrap();
        assert!(report.contains("Rendered"));
    }

    #[test]
    fn batch_scanning_attaches_no_page_but_processor_groups_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let talk = dir.path().join("talk.json");
        fs::write(&talk, r#"{"P569": "{{Constraint:Single value}}"}"#).unwrap();
        let batch = load_batch(&talk).unwrap();
        assert_eq!(batch["P569"].len(), 1);
        assert_eq!(batch["P569"][0].page(), None);
    }
}
