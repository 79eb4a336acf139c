use anyhow::Result;
use autopb::ProjectName;
use console::style;
use dialoguer::Input;
use log::warn;

/// Ask for the project name until a valid one is entered.
pub fn name() -> Result<ProjectName> {
    loop {
        let user_entry = user_question("🤷 Project Name", None)?;
        match ProjectName::parse(user_entry.trim()) {
            Ok(name) => break Ok(name),
            Err(e) => warn!(
                "{} {}",
                style("Sorry,").bold().red(),
                style(e).bold().yellow()
            ),
        }
    }
}

pub fn author(default: Option<&str>) -> Result<String> {
    loop {
        let user_entry = user_question("🤷 Author (full name)", default)?;
        let user_entry = user_entry.trim();
        if !user_entry.is_empty() {
            break Ok(user_entry.to_owned());
        }
        warn!("{}", style("Sorry, the author cannot be empty").bold().red());
    }
}

fn user_question(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut i = Input::<String>::new().with_prompt(prompt);
    if let Some(s) = default {
        i = i.default(s.to_owned());
    }
    i.interact_text().map_err(Into::<anyhow::Error>::into)
}
