mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod session;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use crate::ui::Theme;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 SIMS v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let theme = Theme::new(!cli.no_color);
    let command_result = match cli.command {
        Some(Commands::Presets(args)) => {
            info!("Dispatching to 'presets' command.");
            commands::presets::run(args, theme)
        }
        Some(Commands::Run(args)) => {
            info!("Dispatching to 'run' command.");
            commands::run::run(args, theme)
        }
        None => {
            info!("No command given; starting an interactive session.");
            commands::run::run(Default::default(), theme)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
