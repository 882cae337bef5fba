//! The conversion pipeline
//!
//! [`convert`] is the file-level entry point; [`translate`] is the
//! stream-level core it delegates to, which also makes the pipeline
//! testable against in-memory readers and writers.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::index::TermIndex;
use crate::parser::gene_map;
use crate::writer::{GafRecord, GafWriter};
use crate::{GafError, GafResult};

/// How input GO term tokens are matched against the [`TermIndex`]
///
/// Index keys come from a whitespace split of the reference table and
/// never carry surrounding whitespace; input tokens come from a comma
/// split and may. With [`TermMatching::Exact`] such a padded token is a
/// silent miss, which reproduces the behaviour existing pipelines rely
/// on; [`TermMatching::Trimmed`] removes the padding instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermMatching {
    /// Tokens must match an index key byte-for-byte
    #[default]
    Exact,
    /// Surrounding whitespace is removed from each token before the
    /// lookup; the trimmed form is what appears in the output
    Trimmed,
}

/// Knobs of a conversion run
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// term token matching mode, [`TermMatching::Exact`] by default
    pub matching: TermMatching,
}

/// Aggregate counts of one conversion run
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertStats {
    /// input lines consumed
    pub lines_read: u64,
    /// GAF records written, excluding the header line
    pub records_written: u64,
    /// candidate tokens dropped because the index does not know them
    pub terms_dropped: u64,
}

/// Streams gene mappings from `input` into `out`
///
/// Every input line is split into a gene ID and its candidate GO terms;
/// each candidate present in `index` becomes one GAF record carrying
/// `species` in the first column. Candidates missing from the index
/// (unknown as well as obsolete terms) are dropped without diagnostics.
/// Input order is preserved and duplicates are not collapsed.
///
/// # Errors
///
/// [`GafError::Io`] if reading `input` or writing a record fails; the
/// run aborts at the first failure.
pub fn translate<R: BufRead, W: Write>(
    input: R,
    index: &TermIndex,
    species: &str,
    out: &mut GafWriter<W>,
    options: &ConvertOptions,
) -> GafResult<ConvertStats> {
    let mut stats = ConvertStats::default();

    for line in input.lines() {
        let line = line?;
        stats.lines_read += 1;

        let mapping = gene_map::parse_line(&line);
        for token in &mapping.terms {
            let term = match options.matching {
                TermMatching::Exact => *token,
                TermMatching::Trimmed => token.trim(),
            };
            match index.aspect(term) {
                Some(aspect) => {
                    out.record(&GafRecord {
                        db: species,
                        gene: mapping.gene,
                        term,
                        aspect,
                    })?;
                    stats.records_written += 1;
                }
                None => stats.terms_dropped += 1,
            }
        }
    }

    debug!(
        lines = stats.lines_read,
        records = stats.records_written,
        dropped = stats.terms_dropped,
        "translation finished"
    );
    Ok(stats)
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs a whole conversion from files on disk
///
/// The run is one linear pass with no retry or resumption:
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Loading
///     Loading --> Translating: TermIndex built
///     Translating --> Done: input exhausted
///     Loading --> Failed: open or read error
///     Translating --> Failed: open, read or write error
///     Done --> [*]
///     Failed --> [*]
/// ```
///
/// All three file handles are scoped to this call and released on every
/// exit path. `output` is created (truncated if present) and receives
/// the header plus one line per surviving (gene, term) pair.
///
/// # Errors
///
/// - [`GafError::CannotOpenFile`]: `reference` or `input` can't be
///   opened for reading, or `output` can't be created
/// - [`GafError::Io`]: a read or write failed mid-run; the partial
///   output must not be treated as valid
///
/// # Examples
///
/// ```no_run
/// use map2gaf::{convert, ConvertOptions};
/// use std::path::Path;
///
/// let stats = convert(
///     Path::new("genes.map"),
///     Path::new("GO.terms_alt_ids"),
///     Path::new("annotations.gaf"),
///     "Dictyostelium discoideum",
///     &ConvertOptions::default(),
/// )?;
/// println!("{} records", stats.records_written);
/// # Ok::<(), map2gaf::GafError>(())
/// ```
pub fn convert(
    input: &Path,
    reference: &Path,
    output: &Path,
    species: &str,
    options: &ConvertOptions,
) -> GafResult<ConvertStats> {
    let index = TermIndex::from_path(reference)?;

    let infile =
        File::open(input).map_err(|_| GafError::CannotOpenFile(input.display().to_string()))?;
    let outfile =
        File::create(output).map_err(|_| GafError::CannotOpenFile(output.display().to_string()))?;

    let mut writer = GafWriter::new(BufWriter::new(outfile))?;
    let stats = translate(
        BufReader::new(infile),
        &index,
        species,
        &mut writer,
        options,
    )?;
    writer.flush()?;

    Ok(stats)
}
