//! Convert gene-to-GO-term mapping files into GAF 2.0 association files
//!
//! `map2gaf` reads a tab-delimited mapping of gene/ORF identifiers to
//! comma-separated GO terms, looks every term up in a GO term reference
//! table (`GO.terms_alt_ids` convention) and writes one GAF 2.0 record
//! per (gene, term) pair whose term is known and not obsolete. The output
//! is consumed by association-based tools such as Ontologizer.
//!
//! The whole run is a single sequential pass: build the [`TermIndex`]
//! from the reference file, then stream the mapping file line by line
//! into a [`GafWriter`]. See [`convert`] for the file-level entry point
//! and [`translate`] for the stream-level one.
//!
//! # Examples
//!
//! ```
//! use map2gaf::{translate, ConvertOptions, GafWriter, TermIndex};
//!
//! let reference = "\
//! ! GO IDs and text strings
//! GO:0000001 mitochondrion inheritance P
//! GO:0000108 repairosome obs
//! ";
//! let index = TermIndex::from_reader(reference.as_bytes()).unwrap();
//!
//! let mut out = Vec::new();
//! let mut writer = GafWriter::new(&mut out).unwrap();
//! let stats = translate(
//!     "YAL001C\tGO:0000001,GO:0000108".as_bytes(),
//!     &index,
//!     "Saccharomyces cerevisiae",
//!     &mut writer,
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//!
//! // GO:0000108 is obsolete and never indexed, so only one record survives
//! assert_eq!(stats.records_written, 1);
//! assert!(String::from_utf8(out).unwrap().starts_with("!gaf-version: 2.0\n"));
//! ```

use thiserror::Error;

pub mod convert;
pub mod fetch;
pub mod index;
pub(crate) mod parser;
pub mod writer;

pub use convert::{convert, translate, ConvertOptions, ConvertStats, TermMatching};
pub use fetch::{ReferenceFile, ReferenceSource, DEFAULT_REFERENCE_URL};
pub use index::{Aspect, TermIndex, OBSOLETE_ASPECT};
pub use writer::{GafRecord, GafWriter, GAF_VERSION_HEADER};

/// Error variants of the `map2gaf` crate
#[derive(Error, Debug)]
pub enum GafError {
    /// The reference, input or output file could not be opened
    #[error("unable to open {0}")]
    CannotOpenFile(String),
    /// The reference download did not succeed; nothing was parsed
    #[error("reference download failed: {0}")]
    RemoteFetch(String),
    /// Reading or writing a stream failed mid-run
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide `Result` shorthand
pub type GafResult<T> = Result<T, GafError>;
