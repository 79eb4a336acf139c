use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};
use crate::template_variables::ProjectName;

/// The directory a project is generated into, `base_path/name`.
#[derive(Debug, PartialEq)]
pub(crate) struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    pub fn new(base_path: &Path, name: &ProjectName) -> Self {
        Self(base_path.join(name.as_str()))
    }

    /// Fails with `AlreadyExists` if anything, including a dangling
    /// symlink, sits at the destination.
    pub fn ensure_vacant(&self) -> Result<()> {
        if fs::symlink_metadata(&self.0).is_ok() {
            return Err(Error::AlreadyExists(self.0.clone()));
        }
        Ok(())
    }

    /// Move a fully populated staging directory onto the destination.
    pub fn persist_from(&self, staged: &Path) -> Result<()> {
        // rename happily replaces an empty directory, so check again right before
        self.ensure_vacant()?;
        debug!("moving {} to {}", staged.display(), self.0.display());
        fs::rename(staged, &self.0).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied(self.0.clone()),
            _ if self.0.exists() => Error::AlreadyExists(self.0.clone()),
            _ => Error::Io {
                path: self.0.clone(),
                source: e,
            },
        })
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}
