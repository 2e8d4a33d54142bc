//! zip Archiver
//!
//! Runs `zip -r -X <archive> .` from inside the source directory, so entry
//! paths are relative to it and dotfiles are picked up.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::{ArchiveRequest, Archiver};
use crate::error::{LambdaError, LambdaResult};

use super::command::run_captured;

pub struct ZipArchiver {
    zip: String,
}

impl ZipArchiver {
    pub fn new(zip: impl Into<String>) -> Self {
        Self { zip: zip.into() }
    }

    fn args(archive: &Path) -> Vec<String> {
        vec![
            "-r".to_string(),
            "-X".to_string(),
            "-q".to_string(),
            archive.display().to_string(),
            ".".to_string(),
        ]
    }
}

/// `path` made absolute against the current directory
fn absolute(path: &Path) -> LambdaResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

impl Archiver for ZipArchiver {
    fn archive(&self, request: &ArchiveRequest) -> LambdaResult<PathBuf> {
        if !request.source_dir().is_dir() {
            return Err(LambdaError::ToolFailed {
                tool: "zip".to_string(),
                message: format!("{} is not a directory", request.source_dir().display()),
            });
        }

        std::fs::create_dir_all(&request.dest_dir)?;
        let archive = request.archive_path();
        // zip updates an existing archive in place instead of replacing it
        match std::fs::remove_file(&archive) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }

        let mut cmd = Command::new(&self.zip);
        cmd.args(Self::args(&absolute(&archive)?))
            .current_dir(request.source_dir());
        run_captured("zip", &mut cmd)?.into_result("zip")?;

        tracing::debug!("archived {} into {}", request.source_dir().display(), archive.display());
        Ok(archive)
    }
}
