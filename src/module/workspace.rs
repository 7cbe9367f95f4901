use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;
use crate::error::Result;

/// Scratch space for staging a module.
///
/// Everything under it is removed when the value is dropped, on success and
/// on every error path alike.
pub struct Workspace {
    root: TempDir,
    staging: PathBuf,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let root = tempfile::Builder::new().prefix("fontmod-").tempdir()?;
        let staging = root.path().join("outs");
        debug!("Created workspace {}", root.path().display());
        Ok(Self { root, staging })
    }

    /// Directory the module tree is assembled in
    pub fn staging_dir(&self) -> &Path {
        &self.staging
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        debug!("Cleaning up workspace {}", self.root.path().display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn removed_on_drop() {
        let workspace = Workspace::new().unwrap();
        let root = workspace.path().to_path_buf();
        fs::create_dir_all(workspace.staging_dir().join("system/fonts")).unwrap();
        assert!(root.exists());

        drop(workspace);
        assert!(!root.exists());
    }

    #[test]
    fn removed_when_a_run_fails() {
        fn failing_run(seen: &mut Option<PathBuf>) -> Result<()> {
            let workspace = Workspace::new()?;
            *seen = Some(workspace.path().to_path_buf());
            fs::create_dir_all(workspace.staging_dir())?;
            Err(crate::Error::CorruptTemplate(workspace.staging_dir().join("module.prop")))
        }

        let mut seen = None;
        assert!(failing_run(&mut seen).is_err());
        assert!(!seen.unwrap().exists());
    }
}
