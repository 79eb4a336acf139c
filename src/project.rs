use std::fmt::Display;
use std::path::{Path, PathBuf};

/// A project created on disk by [`ProjectBuilder`](crate::ProjectBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    author: String,
    base_path: PathBuf,
    project_path: PathBuf,
    files: Vec<PathBuf>,
}

impl Project {
    pub(crate) fn new(
        name: String,
        author: String,
        base_path: PathBuf,
        project_path: PathBuf,
        files: Vec<PathBuf>,
    ) -> Self {
        Self {
            name,
            author,
            base_path,
            project_path,
            files,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// The directory the project folder was created in.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Written files, relative to [`Project::project_path`], in template order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|f| self.project_path.join(f))
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.project_path.display().fmt(f)
    }
}
