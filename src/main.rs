mod app_log;
mod args;
mod interactive;
mod user_parsed_input;
mod utils;

use app_log::log_env_init;
use args::*;
use user_parsed_input::{UserParsedInput, AUTHOR_ENV_VAR};

use anyhow::{bail, Result};
use autopb::{Project, ProjectBuilder};
use console::style;
use log::{debug, info};

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    generate(args)?;
    Ok(())
}

/// Collect everything the builder needs, then create the project
fn generate(args: AppArgs) -> Result<Project> {
    let user_parsed_input = UserParsedInput::try_from_args(&args)?;

    let name = match user_parsed_input.name() {
        Some(name) => name.to_owned(),
        None if user_parsed_input.is_silent() => {
            bail!("a project name is required in silent mode")
        }
        None => interactive::name()?.to_string(),
    };
    let author = match user_parsed_input.author() {
        Some(author) => author.to_owned(),
        None if user_parsed_input.is_silent() => bail!(
            "an author is required in silent mode, pass --author or set {}",
            AUTHOR_ENV_VAR
        ),
        None => interactive::author(None)?,
    };

    let config = user_parsed_input.builder_config()?;

    info!(
        "🔧 {}",
        style(format!(
            "Destination: {} ...",
            user_parsed_input.destination().join(&name).display()
        ))
        .bold()
        .yellow()
    );
    info!("🔧 {}", style("Generating template ...").bold().yellow());

    let project = ProjectBuilder::new(name, author)
        .base_path(user_parsed_input.destination())
        .config(config)
        .build()?;

    for file in project.files() {
        debug!("   {}", file.display());
    }
    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(project.project_path().display()).underlined()
    );

    Ok(project)
}
