use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::error::Result;
use crate::utils::{copy_directory, ensure_directory_exists};

/// Turns a staged module tree into the deliverable
pub trait Archiver {
    /// Publish `staged_dir` under `archive_name` and return where it went.
    ///
    /// `archive_name` is already safe to use as a file name.
    fn archive(&self, staged_dir: &Path, archive_name: &str) -> Result<PathBuf>;
}

/// Publishes the staged tree as a plain directory in `output_dir`.
///
/// Any previous output of the same name is replaced.
#[derive(Debug, Clone)]
pub struct DirectoryArchiver {
    pub output_dir: PathBuf,
}

impl DirectoryArchiver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Archiver for DirectoryArchiver {
    fn archive(&self, staged_dir: &Path, archive_name: &str) -> Result<PathBuf> {
        ensure_directory_exists(&self.output_dir)?;
        let target = self.output_dir.join(archive_name);
        if target.exists() {
            fs::remove_dir_all(&target)?;
        }

        copy_directory(staged_dir, &target)?;
        info!("Module written to {}", target.display());
        Ok(target)
    }
}
