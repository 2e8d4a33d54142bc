//! Archiver Port
//!
//! Compresses a directory into a single artifact.

use std::path::{Path, PathBuf};

use crate::error::LambdaResult;

/// What to archive and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    /// Every file below this directory is included, hidden files too.
    /// Paths inside the archive are relative to it.
    pub source_dir: PathBuf,
    /// File name of the archive, e.g. `orders.zip`
    pub archive_name: String,
    /// Directory the archive is written to
    pub dest_dir: PathBuf,
}

impl ArchiveRequest {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        archive_name: impl Into<String>,
        dest_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            archive_name: archive_name.into(),
            dest_dir: dest_dir.into(),
        }
    }

    /// Full path of the archive to produce
    pub fn archive_path(&self) -> PathBuf {
        self.dest_dir.join(&self.archive_name)
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

pub trait Archiver {
    /// Produce the archive, returning its path
    fn archive(&self, request: &ArchiveRequest) -> LambdaResult<PathBuf>;
}
