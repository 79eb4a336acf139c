use indexmap::IndexMap;
use log::warn;
use semver::{Version, VersionReq};
use serde::Deserialize;
use std::path::{Component, Path};
use std::sync::LazyLock;
use std::{fs, io::ErrorKind};

use crate::error::{Error, Result};
use crate::template_set::{TemplateFile, TemplateSet};

pub const CONFIG_FILE_NAME: &str = "autopb.toml";

static CRATE_VERSION: LazyLock<Version> = LazyLock::new(|| {
    Version::parse(env!("CARGO_PKG_VERSION")).expect("package version is valid semver")
});

/// Contents of an `autopb.toml` found in a template directory.
#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
pub struct Config {
    pub template: Option<TemplateConfig>,
    pub values: Option<IndexMap<String, toml::Value>>,
    pub files: Option<Vec<FileConfig>>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct TemplateConfig {
    pub autopb_version: Option<VersionReq>,
    pub builtin: Option<bool>,
    pub packaging: Option<bool>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct FileConfig {
    pub path: String,
    pub contents: Option<String>,
    pub include: Option<String>,
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    /// A missing file is an empty config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents).map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => return Err(Error::io(path, e)),
            },
        };
        Ok(config)
    }

    /// Load `autopb.toml` from a template directory.
    pub fn from_template_dir(template_dir: impl AsRef<Path>) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        if !template_dir.is_dir() {
            return Err(Error::TemplateDirNotFound(template_dir.to_path_buf()));
        }
        let config_file = template_dir.join(CONFIG_FILE_NAME);
        if !config_file.exists() {
            warn!(
                "no {} in {}, using the builtin templates",
                CONFIG_FILE_NAME,
                template_dir.display()
            );
        }
        Self::from_path(config_file)
    }

    pub fn check_version(&self) -> Result<()> {
        if let Some(TemplateConfig {
            autopb_version: Some(required),
            ..
        }) = &self.template
        {
            if !required.matches(&CRATE_VERSION) {
                return Err(Error::VersionMismatch {
                    required: required.clone(),
                    actual: CRATE_VERSION.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn values(&self) -> IndexMap<String, toml::Value> {
        self.values.clone().unwrap_or_default()
    }

    /// Build the file set: builtin files first (unless disabled), then the
    /// packaging files if asked for, then every `[[files]]` entry, which
    /// replaces a previous entry with the same path.
    pub fn template_set(&self, template_dir: &Path) -> Result<TemplateSet> {
        let template = self.template.clone().unwrap_or_default();

        let mut set = if template.builtin.unwrap_or(true) {
            TemplateSet::simple()
        } else {
            TemplateSet::empty()
        };
        if template.packaging.unwrap_or(false) {
            set = set.with_packaging();
        }
        for file in self.files.iter().flatten() {
            set.upsert(file.resolve(template_dir)?);
        }
        Ok(set)
    }
}

impl FileConfig {
    fn resolve(&self, template_dir: &Path) -> Result<TemplateFile> {
        let invalid = |reason| Error::InvalidTemplate {
            path: self.path.clone(),
            reason,
        };
        let contents = match (&self.contents, &self.include) {
            (Some(contents), None) => contents.clone(),
            (None, Some(include)) => {
                if !stays_inside(Path::new(include)) {
                    return Err(invalid("has an `include` outside the template directory"));
                }
                read_include(&template_dir.join(include))?
            }
            (Some(_), Some(_)) => return Err(invalid("has both `contents` and `include`")),
            (None, None) => return Err(invalid("has neither `contents` nor `include`")),
        };
        Ok(TemplateFile::new(self.path.clone(), contents))
    }
}

fn stays_inside(include: &Path) -> bool {
    include
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn read_include(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissingInclude(path.to_path_buf()),
        _ => Error::io(path, e),
    })
}
