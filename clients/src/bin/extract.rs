//! `wdc-extract` — Extracts property-constraint declarations from
//! talk-page wikitext and writes them as formal axioms.
//!
//! **Inputs:**
//! - `--talk <file>` — JSON object: property id → raw talk-page wikitext
//! - `--types <file>` — JSON object: property id → wikibase datatype name
//!
//! **Outputs:**
//! - `<out>/<name>.owl` — OWL 2 functional syntax
//! - `<out>/<name>.rdf` — RDF/XML
//! - `<out>/<name>.report.json` — per-template run report
//!
//! The two document formats are produced independently; a failure on one
//! side does not prevent the other attempt. Exits non-zero only if every
//! format failed.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wdc_clients::ExtractPaths;

/// Extract Wikidata property constraints into OWL 2 and RDF/XML documents.
#[derive(Parser)]
#[command(
    name = "wdc-extract",
    about = "Extract property-constraint templates into OWL 2 functional and RDF/XML documents"
)]
struct Args {
    /// JSON file mapping property ids to raw talk-page wikitext.
    #[arg(long)]
    talk: PathBuf,

    /// JSON file mapping property ids to wikibase datatype names.
    #[arg(long)]
    types: PathBuf,

    /// Output directory for the generated documents.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Base name of the output files.
    #[arg(long, default_value = "constraints")]
    name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let failures = wdc_clients::run(&ExtractPaths {
        talk: args.talk,
        types: args.types,
        out: args.out,
        name: args.name,
    })?;

    // Both formats failing means nothing was produced.
    if failures >= 2 {
        process::exit(1);
    }
    Ok(())
}
