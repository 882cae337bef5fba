//! Writing GAF 2.0 association files
//!
//! The output format is a fixed fifteen-column, tab-separated table with
//! a single `!gaf-version: 2.0` header line. Most columns carry literal
//! placeholder values; they are part of the format contract expected by
//! downstream consumers (e.g. Ontologizer) and are not configurable.

use std::io::Write;

use crate::index::Aspect;
use crate::GafResult;

/// First line of every GAF 2.0 file
pub const GAF_VERSION_HEADER: &str = "!gaf-version: 2.0";

/// Prefix gluing the DB object ID (column 2) onto the gene ID
const DB_OBJECT_PREFIX: &str = "db.";
const QUALIFIER: &str = "0";
const DB_REFERENCE: &str = "PMID:0000000";
const EVIDENCE_CODE: &str = "ISO";
const WITH_FROM: &str = "0";
const DB_OBJECT_NAME: &str = "0";
const DB_OBJECT_SYNONYM: &str = "0";
const DB_OBJECT_TYPE: &str = "gene";
const TAXON: &str = "taxon:79327";
const ANNOTATION_DATE: &str = "23022011";
const ASSIGNED_BY: &str = "PFAM";

/// One association between a gene and a GO term
///
/// Rendered through [`Display`](std::fmt::Display) as a single GAF 2.0
/// line with the following columns:
///
/// | Column | Name | Content |
/// | --- | --- | --- |
/// | 1 | DB | species name of the run |
/// | 2 | DB Object ID | `db.` + gene ID |
/// | 3 | DB Object Symbol | gene ID |
/// | 4 | Qualifier | `0` |
/// | 5 | GO ID | the term token |
/// | 6 | DB:Reference | `PMID:0000000` |
/// | 7 | Evidence Code | `ISO` |
/// | 8 | With/From | `0` |
/// | 9 | Aspect | aspect code from the reference table |
/// | 10 | DB Object Name | `0` |
/// | 11 | DB Object Synonym | `0` |
/// | 12 | DB Object Type | `gene` |
/// | 13 | Taxon | `taxon:79327` |
/// | 14 | Date | `23022011` |
/// | 15 | Assigned By | `PFAM` |
///
/// # Examples
///
/// ```
/// use map2gaf::{Aspect, GafRecord};
///
/// let record = GafRecord {
///     db: "Test species",
///     gene: "GENE1",
///     term: "GO:0001",
///     aspect: &Aspect::Process,
/// };
/// assert!(record.to_string().starts_with("Test species\tdb.GENE1\tGENE1\t0\tGO:0001\t"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GafRecord<'a> {
    /// species name, column 1
    pub db: &'a str,
    /// gene/ORF identifier, columns 2 (prefixed) and 3
    pub gene: &'a str,
    /// GO term ID, column 5
    pub term: &'a str,
    /// aspect code of the term, column 9
    pub aspect: &'a Aspect,
}

impl std::fmt::Display for GafRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{db}\t{prefix}{gene}\t{gene}\t{qualifier}\t{term}\t{reference}\t{evidence}\t\
             {with}\t{aspect}\t{name}\t{synonym}\t{objtype}\t{taxon}\t{date}\t{assigned}",
            db = self.db,
            prefix = DB_OBJECT_PREFIX,
            gene = self.gene,
            qualifier = QUALIFIER,
            term = self.term,
            reference = DB_REFERENCE,
            evidence = EVIDENCE_CODE,
            with = WITH_FROM,
            aspect = self.aspect,
            name = DB_OBJECT_NAME,
            synonym = DB_OBJECT_SYNONYM,
            objtype = DB_OBJECT_TYPE,
            taxon = TAXON,
            date = ANNOTATION_DATE,
            assigned = ASSIGNED_BY,
        )
    }
}

/// Streaming writer of one GAF 2.0 file
///
/// The version header is written on construction, so every `GafWriter`
/// produces it exactly once and before any record, even if no record
/// follows.
pub struct GafWriter<W: Write> {
    out: W,
}

impl<W: Write> GafWriter<W> {
    /// Wraps `out` and writes the `!gaf-version: 2.0` header line
    ///
    /// # Errors
    ///
    /// [`GafError::Io`](crate::GafError::Io) if the header cannot be
    /// written.
    pub fn new(mut out: W) -> GafResult<Self> {
        writeln!(out, "{GAF_VERSION_HEADER}")?;
        Ok(GafWriter { out })
    }

    /// Appends one association line
    pub fn record(&mut self, record: &GafRecord<'_>) -> GafResult<()> {
        writeln!(self.out, "{record}")?;
        Ok(())
    }

    /// Flushes the underlying stream
    pub fn flush(&mut self) -> GafResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
