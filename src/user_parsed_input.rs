//! Input from user but after parse

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use autopb::{BuilderConfig, CONFIG_FILE_NAME};
use console::style;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::utils::{canonicalize_path, user_template_dir};
use crate::AppArgs;

pub const AUTHOR_ENV_VAR: &str = "AUTOPB_AUTHOR";

// Contains parsed information from user.
#[derive(Debug)]
pub struct UserParsedInput {
    name: Option<String>,
    author: Option<String>,

    template_dir: Option<PathBuf>,
    destination: PathBuf,

    // values defined through `--define`, applied over the template's own
    template_values: IndexMap<String, toml::Value>,

    packaging: bool,
    silent: bool,
}

impl UserParsedInput {
    pub fn try_from_args(args: &AppArgs) -> Result<Self> {
        let destination = match &args.destination {
            Some(p) => canonicalize_path(p)
                .context("cannot get the absolute path of the destination folder")?,
            None => env::current_dir().context("cannot read the current directory")?,
        };

        let template_dir = match &args.template {
            Some(p) => Some(canonicalize_path(p)?),
            None => default_template_dir(),
        };

        let mut template_values = IndexMap::new();
        for item in args.define.iter() {
            match item.split_once('=') {
                Some((k, v)) => {
                    template_values.insert(k.trim().to_string(), toml::Value::String(v.to_string()));
                }
                None => bail!(
                    "{} `{}`, expected `key=value`",
                    style("Invalid --define").bold().red(),
                    style(item).bold()
                ),
            }
        }

        let author = args
            .author
            .clone()
            .or_else(|| env::var(AUTHOR_ENV_VAR).ok())
            .filter(|a| !a.trim().is_empty());

        Ok(Self {
            name: args.name.clone(),
            author,
            template_dir,
            destination,
            template_values,
            packaging: args.packaging,
            silent: args.silent,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }

    pub fn destination(&self) -> &Path {
        self.destination.as_path()
    }

    pub const fn template_values(&self) -> &IndexMap<String, toml::Value> {
        &self.template_values
    }

    pub const fn is_silent(&self) -> bool {
        self.silent
    }

    /// Template directory config, then `--packaging`, then `--define` values.
    pub fn builder_config(&self) -> Result<BuilderConfig> {
        let mut config = match self.template_dir() {
            Some(dir) => {
                debug!("using templates from {}", dir.display());
                BuilderConfig::from_template_dir(dir)?
            }
            None => BuilderConfig::default(),
        };
        if self.packaging {
            config = config.with_packaging();
        }
        for (k, v) in self.template_values() {
            config = config.define(k.clone(), v.clone());
        }
        Ok(config)
    }
}

/// `~/.config/autopb`, but only when it actually holds a config.
fn default_template_dir() -> Option<PathBuf> {
    let dir = user_template_dir().ok()?;
    if dir.join(CONFIG_FILE_NAME).is_file() {
        Some(dir)
    } else {
        if dir.exists() {
            warn!(
                "{} has no {}, ignoring it",
                style(dir.display()).bold(),
                CONFIG_FILE_NAME
            );
        }
        None
    }
}
