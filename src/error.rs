use std::io;
use std::path::{Path, PathBuf};

use semver::{Version, VersionReq};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while scaffolding a project.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid project name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("base path does not exist: {}", .0.display())]
    BasePathNotFound(PathBuf),

    #[error("base path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("target directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("template path `{path}` {reason}")]
    InvalidTemplatePath { path: String, reason: &'static str },

    #[error("template path `{0}` is listed more than once")]
    DuplicateTemplatePath(String),

    #[error("template `{0}` rendered to an empty file")]
    EmptyTemplate(String),

    #[error("template entry `{path}` {reason}")]
    InvalidTemplate { path: String, reason: &'static str },

    #[error("include file not found: {}", .0.display())]
    MissingInclude(PathBuf),

    #[error("template directory not found: {}", .0.display())]
    TemplateDirNotFound(PathBuf),

    #[error("error rendering template `{path}`")]
    Template {
        path: String,
        #[source]
        source: liquid_core::Error,
    },

    #[error("cannot build the template engine")]
    Engine(#[source] liquid_core::Error),

    #[error("invalid configuration file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported value type for `{0}`, only strings and booleans are supported")]
    UnsupportedValue(String),

    #[error("required autopb version not met, required: {required} was: {actual}")]
    VersionMismatch {
        required: VersionReq,
        actual: Version,
    },

    #[error("io error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an io error that happened at `path`, lifting the kinds callers
    /// match on into their own variants.
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            _ => Self::Io { path, source },
        }
    }
}
