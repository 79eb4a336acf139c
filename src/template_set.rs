use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use liquid::Parser;
use liquid_core::Object;
use log::debug;

use crate::error::{Error, Result};
use crate::template::render_string;

const SCRIPT_TEMPLATE: &str = include_str!("templates/script.py.liquid");
const LICENSE_TEMPLATE: &str = include_str!("templates/LICENSE.liquid");
const TODO_TEMPLATE: &str = include_str!("templates/TODO.md.liquid");
const README_TEMPLATE: &str = include_str!("templates/README.md.liquid");
const SETUP_TEMPLATE: &str = include_str!("templates/setup.py.liquid");
const GITIGNORE_TEMPLATE: &str = include_str!("templates/gitignore.liquid");

/// One file of a project: a liquid template for its relative path and
/// another for its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    path: String,
    contents: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// A file after rendering, relative to the project root.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RenderedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// The ordered list of files written into every new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    files: Vec<TemplateFile>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::simple()
    }
}

impl TemplateSet {
    pub fn empty() -> Self {
        Self { files: Vec::new() }
    }

    /// script stub, LICENSE, TODO.md and README.md
    pub fn simple() -> Self {
        Self {
            files: vec![
                TemplateFile::new("{{ module_name }}.py", SCRIPT_TEMPLATE),
                TemplateFile::new("LICENSE", LICENSE_TEMPLATE),
                TemplateFile::new("TODO.md", TODO_TEMPLATE),
                TemplateFile::new("README.md", README_TEMPLATE),
            ],
        }
    }

    /// Adds `setup.py` and `.gitignore`.
    pub fn with_packaging(mut self) -> Self {
        self.upsert(TemplateFile::new("setup.py", SETUP_TEMPLATE));
        self.upsert(TemplateFile::new(".gitignore", GITIGNORE_TEMPLATE));
        self
    }

    /// Replace the entry with the same path template in place, or append.
    pub fn upsert(&mut self, file: TemplateFile) {
        match self.files.iter_mut().find(|f| f.path == file.path) {
            Some(existing) => *existing = file,
            None => self.files.push(file),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Render every path and body. Nothing touches the disk here, so a bad
    /// template fails before the project directory exists.
    pub(crate) fn render(&self, engine: &Parser, globals: &Object) -> Result<Vec<RenderedFile>> {
        let mut seen = HashSet::with_capacity(self.files.len());
        let mut rendered = Vec::with_capacity(self.files.len());

        for file in &self.files {
            let path = render_string(engine, globals, &file.path, &file.path)?;
            let relative_path = checked_relative_path(&path)?;
            if !seen.insert(relative_path.clone()) {
                return Err(Error::DuplicateTemplatePath(path));
            }

            let contents = render_string(engine, globals, &file.contents, &path)?;
            if contents.trim().is_empty() {
                return Err(Error::EmptyTemplate(path));
            }

            debug!("rendered {} ({} bytes)", path, contents.len());
            rendered.push(RenderedFile {
                relative_path,
                contents,
            });
        }

        for file in &rendered {
            let parent = file.relative_path.ancestors().skip(1).find(|a| seen.contains(*a));
            if let Some(parent) = parent {
                return Err(Error::InvalidTemplatePath {
                    path: parent.display().to_string(),
                    reason: "is used both as a file and as a directory",
                });
            }
        }

        Ok(rendered)
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a TemplateFile;
    type IntoIter = std::slice::Iter<'a, TemplateFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

fn checked_relative_path(rendered: &str) -> Result<PathBuf> {
    let invalid = |reason| Error::InvalidTemplatePath {
        path: rendered.to_owned(),
        reason,
    };

    let mut relative = PathBuf::new();
    for component in Path::new(rendered.trim()).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(invalid("must not contain `..`")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("must be relative to the project"))
            }
        }
    }
    if relative.as_os_str().is_empty() {
        return Err(invalid("renders to an empty path"));
    }
    Ok(relative)
}
