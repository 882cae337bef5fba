//! Retrieval of the GO term reference table
//!
//! The converter itself only needs a readable reference file path; this
//! module decides where that file comes from. Callers either point at a
//! file they already have, or let the tool download the published table
//! once for the duration of the run.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{GafError, GafResult};

/// Published location of the GO terms/alt-IDs reference table
pub const DEFAULT_REFERENCE_URL: &str = "http://www.geneontology.org/doc/GO.terms_alt_ids";

// one download per run; generous cap for slow mirrors
const FETCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Where the GO term reference table comes from
#[derive(Debug, Clone)]
pub enum ReferenceSource {
    /// an existing file on disk, left untouched
    Local(PathBuf),
    /// a URL fetched once into a transient file
    Remote(String),
}

impl ReferenceSource {
    /// Produces a readable reference file
    ///
    /// [`ReferenceSource::Remote`] performs a single blocking GET and
    /// streams the response body verbatim into a process-unique file in
    /// the system temp directory. No retries; a failed fetch aborts
    /// before any parsing begins.
    ///
    /// # Errors
    ///
    /// - [`GafError::RemoteFetch`]: non-success HTTP status or a
    ///   transport failure
    /// - [`GafError::CannotOpenFile`]: the transient file cannot be
    ///   created
    pub fn acquire(self) -> GafResult<ReferenceFile> {
        match self {
            ReferenceSource::Local(path) => Ok(ReferenceFile {
                path,
                transient: false,
            }),
            ReferenceSource::Remote(url) => {
                let path = std::env::temp_dir()
                    .join(format!("GO.terms_alt_ids.{}", std::process::id()));
                download(&url, &path)?;
                Ok(ReferenceFile {
                    path,
                    transient: true,
                })
            }
        }
    }
}

/// A readable reference file, possibly downloaded for this run only
#[derive(Debug)]
pub struct ReferenceFile {
    path: PathBuf,
    transient: bool,
}

impl ReferenceFile {
    /// Path to hand to [`TermIndex::from_path`](crate::TermIndex::from_path)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file again if it was downloaded
    ///
    /// To be called after a successful run. Removal is best-effort: a
    /// failure is logged and the file stays behind. A run that errors
    /// out earlier never reaches this point, so a failed run leaves the
    /// download in place.
    pub fn finish(self) {
        if !self.transient {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(file = %self.path.display(), "removed transient reference file"),
            Err(err) => {
                warn!(file = %self.path.display(), %err, "could not remove transient reference file");
            }
        }
    }
}

fn download(url: &str, dest: &Path) -> GafResult<()> {
    info!(%url, "fetching GO term reference");

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| GafError::RemoteFetch(err.to_string()))?;
    let mut response = client
        .get(url)
        .send()
        .map_err(|err| GafError::RemoteFetch(err.to_string()))?;

    if !response.status().is_success() {
        return Err(GafError::RemoteFetch(format!(
            "HTTP {} for {url}",
            response.status()
        )));
    }

    let mut file =
        File::create(dest).map_err(|_| GafError::CannotOpenFile(dest.display().to_string()))?;
    let bytes = io::copy(&mut response, &mut file)?;
    debug!(bytes, file = %dest.display(), "reference table written");
    Ok(())
}
