use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "MccoyFreyr",
    version,
    about = "SIMS - An interactive, in-memory Students' Information Management System.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored terminal output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive student management session.
    Run(RunArgs),
    /// Inspect preset seed files.
    Presets(PresetsArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the maximum number of student records.
    #[arg(long, value_name = "INT")]
    pub capacity: Option<usize>,

    /// Seed department, major and score-name presets from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub presets: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S registry.capacity=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `presets` subcommand.
#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[command(subcommand)]
    pub command: PresetsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PresetsCommands {
    /// Validate a preset seed file and print its contents.
    Check {
        /// The preset file to validate.
        #[arg(required = true)]
        path: PathBuf,
    },
}
