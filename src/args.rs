use std::path::PathBuf;

use clap::Parser;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const PROJECT_PARAMETERS: &str = "Project Parameters";
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

#[derive(Parser, Clone, Debug, Default)]
#[command(
    name = "autopb",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Name of the project directory to create; letters, digits, `_` and `-`
    #[arg(value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub name: Option<String>,

    /// Author substituted into the LICENSE and README; falls back to $AUTOPB_AUTHOR
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub author: Option<String>,

    /// Directory holding an `autopb.toml`; defaults to ~/.config/autopb when it has one
    #[arg(long, short, value_parser, value_name = "DIR", help_heading = heading::TEMPLATE_SELECTION)]
    pub template: Option<PathBuf>,

    /// Also write setup.py and .gitignore
    #[arg(long, action, help_heading = heading::TEMPLATE_SELECTION)]
    pub packaging: bool,

    /// Define a value for use during template expansion. E.g `--define license=MIT`
    #[arg(long, short, num_args = 1, value_parser, help_heading = heading::TEMPLATE_SELECTION)]
    pub define: Vec<String>,

    /// Create the project inside the given directory instead of the current one
    #[arg(long, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Never prompt; a missing name or author is an error
    #[arg(long, short, action)]
    pub silent: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
