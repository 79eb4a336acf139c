//! Scaffold a new project directory from a small set of rendered templates.
//!
//! ```no_run
//! let project = autopb::create_simple_project("/tmp/projects", "demo", "Alice")?;
//! assert!(project.project_path().join("README.md").exists());
//! # Ok::<(), autopb::Error>(())
//! ```

mod builder;
mod error;
mod project;
mod template;
mod template_config;
mod template_filters;
mod template_set;
mod template_variables;

pub use builder::{create_simple_project, BuilderConfig, ProjectBuilder};
pub use error::{Error, Result};
pub use project::Project;
pub use template_config::{Config, FileConfig, TemplateConfig, CONFIG_FILE_NAME};
pub use template_set::{TemplateFile, TemplateSet};
pub use template_variables::ProjectName;
