mod project_dir;
mod project_name;

pub(crate) use project_dir::ProjectDir;
pub use project_name::ProjectName;
