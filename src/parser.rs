//! Parsing the GO reference table and the gene mapping input
//!
//! Both file formats are line based and parsed without lookahead; each
//! submodule owns the line format of one file.

use std::path::Path;

/// Module to parse the GO terms/alt-IDs reference table
///
/// # Example lines
///
/// ```text
/// ! GO IDs (primary only) and text strings
/// GO:0000001  GO:0044699  mitochondrion inheritance  P
/// GO:0000108  repairosome  obs
/// ```
pub(crate) mod go_terms {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    use tracing::debug;

    use crate::index::{Aspect, TermIndex, OBSOLETE_ASPECT};
    use crate::parser::Path;
    use crate::{GafError, GafResult};

    /// A single usable reference line
    struct TermRecord<'a> {
        id: &'a str,
        aspect: &'a str,
    }

    /// Parses one line of the reference table
    ///
    /// Returns `None` for lines that do not contribute to the index:
    /// `!`-comments, blank lines and terms whose aspect code marks them
    /// as obsolete.
    ///
    /// A record has a variable number of whitespace-separated fields;
    /// only the first (term ID) and the last (aspect code) take part.
    /// The last field of a single-field line is that field itself.
    fn parse_line(line: &str) -> Option<TermRecord<'_>> {
        if line.starts_with('!') {
            return None;
        }

        let mut fields = line.split_whitespace();
        let id = fields.next()?;
        let aspect = fields.last().unwrap_or(id);

        if aspect == OBSOLETE_ASPECT {
            return None;
        }

        Some(TermRecord { id, aspect })
    }

    /// Reads a reference file into `index`
    ///
    /// # Errors
    ///
    /// - [`GafError::CannotOpenFile`]: the file is not present or can't be opened
    /// - [`GafError::Io`]: a line could not be read
    pub fn parse<P: AsRef<Path>>(file: P, index: &mut TermIndex) -> GafResult<()> {
        let filename = file.as_ref().display().to_string();
        let file = File::open(file).map_err(|_| GafError::CannotOpenFile(filename))?;
        parse_reader(BufReader::new(file), index)
    }

    /// Reads reference lines from any buffered reader into `index`
    ///
    /// On duplicate term IDs the later line overwrites the earlier one.
    pub fn parse_reader<R: BufRead>(reader: R, index: &mut TermIndex) -> GafResult<()> {
        for line in reader.lines() {
            let line = line?;
            if let Some(term) = parse_line(&line) {
                index.insert(term.id.to_string(), Aspect::from(term.aspect));
            }
        }
        debug!(terms = index.len(), "GO term reference loaded");
        Ok(())
    }

}

/// Module to parse the tab-delimited gene→GO mapping input
///
/// # Example line
///
/// ```text
/// YAL001C<TAB>GO:0003677,GO:0005634,GO:0006384
/// ```
pub(crate) mod gene_map {
    use smallvec::SmallVec;

    /// One input line: a gene/ORF ID with its candidate GO term tokens
    ///
    /// The candidate list preserves input order and duplicates. Tokens
    /// are the raw text between commas, without any trimming; matching
    /// against the index happens downstream.
    pub(crate) struct GeneMapping<'a> {
        pub gene: &'a str,
        pub terms: SmallVec<[&'a str; 8]>,
    }

    /// Splits one line of the mapping file
    ///
    /// Field 0 (tab-separated) is the gene ID, field 1 the comma-separated
    /// GO term list; any further fields are ignored. A line without a
    /// second tab field maps to an empty term list and produces no
    /// output, which is tolerated rather than an error.
    pub(crate) fn parse_line(line: &str) -> GeneMapping<'_> {
        let mut cols = line.split('\t');
        let gene = cols.next().unwrap_or("");
        let terms = match cols.next() {
            Some(list) => list.split(',').collect(),
            None => SmallVec::new(),
        };
        GeneMapping { gene, terms }
    }

}
