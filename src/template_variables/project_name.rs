use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9_-]*[A-Za-z0-9_])?$").expect("name pattern is valid")
});

/// A project name that is safe to use as a single directory component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self> {
        if VALID_NAME.is_match(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(Error::InvalidName {
                name: name.to_owned(),
                reason: rejection_reason(name),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name usable as a python module, `-` becomes `_`.
    pub fn module_name(&self) -> String {
        self.0.replace('-', "_")
    }
}

fn rejection_reason(name: &str) -> &'static str {
    if name.is_empty() {
        "name is empty"
    } else if name.contains(['/', '\\']) {
        "contains a path separator"
    } else if name.chars().any(char::is_whitespace) {
        "contains whitespace"
    } else if name.starts_with(['-', '_']) {
        "must start with a letter or a digit"
    } else if name.ends_with('-') {
        "must not end with `-`"
    } else {
        "only letters, digits, `_` and `-` are allowed"
    }
}

impl FromStr for ProjectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
