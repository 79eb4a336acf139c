use indoc::indoc;
use std::fs;
use std::io::Write;

use crate::helpers::project::Project;
use tempfile::TempDir;

pub struct ProjectBuilder {
    files: Vec<(String, String)>,
    root: TempDir,
}

pub fn tempdir() -> ProjectBuilder {
    ProjectBuilder {
        files: Vec::new(),
        root: tempfile::Builder::new().prefix("autopb").tempdir().unwrap(),
    }
}

impl ProjectBuilder {
    /// creates an `autopb.toml` that overrides the README and defines a `license` value
    pub fn with_default_config(self) -> Self {
        self.file(
            "autopb.toml",
            indoc! {r#"
                [template]
                autopb_version = ">=0.1.0"

                [values]
                license = "MIT"

                [[files]]
                path = "README.md"
                include = "README.md.liquid"
            "#},
        )
        .file(
            "README.md.liquid",
            "# {{ project-name | title_case }}\n\n{{ license }} licensed, by {{ author }}\n",
        )
    }

    pub fn file(mut self, name: &str, contents: impl AsRef<str>) -> Self {
        self.files.retain(|(f, _)| f != name);
        self.files
            .push((name.to_string(), contents.as_ref().to_string()));
        self
    }

    pub fn build(self) -> Project {
        let path = self.root.path();

        for (file, contents) in self.files.iter() {
            let path = path.join(file);
            let parent = path
                .parent()
                .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

            fs::File::create(&path)
                .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
                .write_all(contents.as_bytes())
                .unwrap_or_else(|_| panic!("couldn't write to file {path:?}: {contents:?}"));
        }

        Project { root: self.root }
    }
}
