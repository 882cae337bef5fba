use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use map2gaf::{convert, ConvertOptions, TermMatching};
use map2gaf::{ReferenceSource, DEFAULT_REFERENCE_URL};

const MANUAL: &str = "\
INPUT FORMAT
  One record per line, tab-delimited:

      <geneID><TAB><term1>,<term2>,...

  Columns after the second are ignored. A line without a second column
  produces no output.

REFERENCE FORMAT (GO.terms_alt_ids convention)
  Lines starting with '!' are comments. Data lines hold whitespace-
  separated fields; the first field is the GO term ID and the last field
  its one-letter aspect code (P, F or C). The code 'obs' marks an
  obsolete term, which is excluded from the output. Without --reference
  the table is downloaded from the published URL and removed again after
  a successful run.

OUTPUT FORMAT (GAF 2.0)
  A '!gaf-version: 2.0' header line, then one tab-separated record per
  (gene, term) pair whose term is known and not obsolete:

      [species] [db.<gene>] [gene] [0] [term] [PMID:0000000] [ISO] [0]
      [aspect] [0] [0] [gene] [taxon:79327] [23022011] [PFAM]

  The placeholder columns are fixed; they keep the file acceptable to
  downstream consumers such as Ontologizer.

MATCHING
  GO term tokens are matched against the reference byte-for-byte, so a
  token with stray surrounding whitespace is silently dropped. Use
  --trim to trim tokens before the lookup instead.
";

#[derive(Parser, Debug)]
#[command(
    name = "map2gaf",
    version,
    about = "Convert a gene-to-GO-term mapping file into a GAF 2.0 association file",
    after_long_help = MANUAL
)]
struct Args {
    /// Tab-delimited gene to GO-term mapping file
    #[arg(short, long)]
    input: PathBuf,

    /// GAF 2.0 output file (overwritten if present)
    #[arg(short, long)]
    output: PathBuf,

    /// Species name written to the first GAF column
    #[arg(short, long)]
    species: String,

    /// Local GO terms/alt-IDs reference file; when absent the published
    /// table is downloaded for the duration of the run
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Trim surrounding whitespace from GO term tokens before the lookup
    #[arg(long)]
    trim: bool,

    /// Suppress the run summary and set the logging level to WARN
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = match args.reference {
        Some(path) => ReferenceSource::Local(path),
        None => ReferenceSource::Remote(DEFAULT_REFERENCE_URL.to_string()),
    };
    let options = ConvertOptions {
        matching: if args.trim {
            TermMatching::Trimmed
        } else {
            TermMatching::Exact
        },
    };

    let reference = source.acquire()?;
    let stats = convert(
        &args.input,
        reference.path(),
        &args.output,
        &args.species,
        &options,
    )?;
    reference.finish();

    tracing::info!(
        lines = stats.lines_read,
        records = stats.records_written,
        dropped = stats.terms_dropped,
        output = %args.output.display(),
        "map2gaf: conversion complete"
    );
    Ok(())
}
