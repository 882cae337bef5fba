//! The in-memory GO term lookup table
//!
//! A [`TermIndex`] maps GO term IDs to their one-letter [`Aspect`] code.
//! It is built once per run from a `GO.terms_alt_ids`-style reference
//! file and owned for the duration of that run; obsolete terms are never
//! part of it.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::BufRead;
use std::path::Path;

use crate::parser;
use crate::GafResult;

/// Aspect-column marker for terms retired from current use
pub const OBSOLETE_ASPECT: &str = "obs";

/// One-letter code of the GO sub-ontology a term belongs to
///
/// The reference table is not validated, so codes other than `P`, `F`
/// and `C` are carried through byte-exact via [`Aspect::Other`].
///
/// # Examples
///
/// ```
/// use map2gaf::Aspect;
///
/// assert_eq!(Aspect::from("P"), Aspect::Process);
/// assert_eq!(Aspect::from("F").as_str(), "F");
/// assert_eq!(Aspect::from("pfam_special").to_string(), "pfam_special");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// `P`, biological process
    Process,
    /// `F`, molecular function
    Function,
    /// `C`, cellular component
    Component,
    /// any other code, reproduced verbatim in the output
    Other(String),
}

impl Aspect {
    /// The code exactly as it appeared in the reference file
    pub fn as_str(&self) -> &str {
        match self {
            Aspect::Process => "P",
            Aspect::Function => "F",
            Aspect::Component => "C",
            Aspect::Other(code) => code,
        }
    }
}

impl From<&str> for Aspect {
    fn from(code: &str) -> Self {
        match code {
            "P" => Aspect::Process,
            "F" => Aspect::Function,
            "C" => Aspect::Component,
            _ => Aspect::Other(code.to_string()),
        }
    }
}

impl Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Aspect {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

/// Mapping from GO term ID to aspect code
///
/// Term IDs are matched byte-exact against the tokens of the reference
/// file; no normalisation happens on lookup. On duplicate term IDs the
/// later reference line wins.
///
/// # Examples
///
/// ```
/// use map2gaf::TermIndex;
///
/// let reference = "\
/// ! GO IDs and text strings
/// GO:0000001 GO:0044699 mitochondrion inheritance P
/// GO:0000108 repairosome obs
/// ";
/// let index = TermIndex::from_reader(reference.as_bytes()).unwrap();
///
/// assert_eq!(index.len(), 1);
/// assert!(index.contains("GO:0000001"));
/// // obsolete terms are never indexed
/// assert!(!index.contains("GO:0000108"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct TermIndex {
    terms: HashMap<String, Aspect>,
}

impl TermIndex {
    /// Constructs a new, empty `TermIndex`
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a reference file on disk
    ///
    /// # Errors
    ///
    /// - [`GafError::CannotOpenFile`](crate::GafError::CannotOpenFile):
    ///   the file is not present or can't be opened
    /// - [`GafError::Io`](crate::GafError::Io): a line could not be read
    pub fn from_path<P: AsRef<Path>>(path: P) -> GafResult<Self> {
        let mut index = TermIndex::new();
        parser::go_terms::parse(path, &mut index)?;
        Ok(index)
    }

    /// Builds the index from any buffered reader of reference lines
    pub fn from_reader<R: BufRead>(reader: R) -> GafResult<Self> {
        let mut index = TermIndex::new();
        parser::go_terms::parse_reader(reader, &mut index)?;
        Ok(index)
    }

    /// Adds a term to the index
    ///
    /// A term that is already present is overwritten, so of two reference
    /// lines with the same term ID the later one wins.
    pub fn insert(&mut self, term: String, aspect: Aspect) {
        self.terms.insert(term, aspect);
    }

    /// The aspect code of `term`, or `None` if the term is unknown
    pub fn aspect(&self, term: &str) -> Option<&Aspect> {
        self.terms.get(term)
    }

    /// Returns `true` if `term` is part of the index
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of indexed terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no terms are indexed
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(term ID, aspect)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Aspect)> {
        self.terms.iter().map(|(term, aspect)| (term.as_str(), aspect))
    }
}
