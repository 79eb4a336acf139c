use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::project::Project;
use crate::template::{create_liquid_engine, create_liquid_object};
use crate::template_config::Config;
use crate::template_set::{RenderedFile, TemplateSet};
use crate::template_variables::{ProjectDir, ProjectName};

/// What goes into a new project: the file set and extra template values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuilderConfig {
    pub templates: TemplateSet,
    pub values: IndexMap<String, toml::Value>,
}

impl BuilderConfig {
    /// Read `autopb.toml` from `template_dir`, see [`Config`].
    pub fn from_template_dir(template_dir: impl AsRef<Path>) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        let config = Config::from_template_dir(template_dir)?;
        config.check_version()?;
        Ok(Self {
            templates: config.template_set(template_dir)?,
            values: config.values(),
        })
    }

    pub fn with_packaging(mut self) -> Self {
        self.templates = self.templates.with_packaging();
        self
    }

    /// Set a template value, replacing an earlier one with the same key.
    pub fn define(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Creates a project directory populated from a [`TemplateSet`].
///
/// The files are rendered in memory, written into a staging directory next
/// to the destination and moved into place with a single rename, so a
/// failed build leaves nothing behind.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    name: String,
    author: String,
    base_path: Option<PathBuf>,
    config: BuilderConfig,
}

impl ProjectBuilder {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            base_path: None,
            config: BuilderConfig::default(),
        }
    }

    /// Defaults to the current working directory.
    pub fn base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Project> {
        let name = ProjectName::parse(&self.name)?;

        let base_path = match self.base_path {
            Some(base_path) => base_path,
            None => env::current_dir().map_err(|e| Error::io(".", e))?,
        };
        check_base_path(&base_path)?;

        let destination = ProjectDir::new(&base_path, &name);
        destination.ensure_vacant()?;

        let engine = create_liquid_engine()?;
        let globals = create_liquid_object(&name, &self.author, &self.config.values)?;
        let rendered = self.config.templates.render(&engine, &globals)?;

        let staging = staging_dir(&base_path)?;
        let staged_root = staging.path().join(name.as_str());
        write_tree(&staged_root, &rendered)?;
        destination.persist_from(&staged_root)?;
        drop(staging);

        debug!("created {} with {} files", destination, rendered.len());

        Ok(Project::new(
            self.name,
            self.author,
            base_path,
            destination.into_path_buf(),
            rendered.into_iter().map(|f| f.relative_path).collect(),
        ))
    }
}

/// Create `base_path/name` holding the simple template set, with `author`
/// substituted into the LICENSE and README.
pub fn create_simple_project(
    base_path: impl AsRef<Path>,
    name: &str,
    author: &str,
) -> Result<Project> {
    ProjectBuilder::new(name, author)
        .base_path(base_path.as_ref())
        .build()
}

fn check_base_path(base_path: &Path) -> Result<()> {
    let metadata = fs::metadata(base_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::BasePathNotFound(base_path.to_path_buf()),
        _ => Error::io(base_path, e),
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(base_path.to_path_buf()));
    }
    Ok(())
}

/// Staging lives inside `base_path` so the final rename never crosses a
/// filesystem boundary. It doubles as the writability check.
fn staging_dir(base_path: &Path) -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(".autopb-")
        .tempdir_in(base_path)
        .map_err(|e| Error::io(base_path, e))
}

/// Errors here concern the hidden staging tree, never the destination, so
/// they stay plain io errors.
fn write_tree(root: &Path, files: &[RenderedFile]) -> Result<()> {
    fs::create_dir(root).map_err(staging_io(root))?;
    for file in files {
        let path = root.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(staging_io(parent))?;
        }
        fs::write(&path, &file.contents).map_err(staging_io(&path))?;
    }
    Ok(())
}

fn staging_io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
