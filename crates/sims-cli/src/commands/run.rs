use crate::cli::RunArgs;
use crate::config;
use crate::error::Result;
use crate::session::Session;
use crate::ui::Theme;
use sims::workflows::manager::StudentManager;
use std::io;
use tracing::info;

pub fn run(args: RunArgs, theme: Theme) -> Result<()> {
    info!("Resolving registry configuration...");
    let config = config::build_config(&args)?;
    info!(
        capacity = config.capacity,
        departments = config.presets.departments.len(),
        majors = config.presets.majors.len(),
        score_names = config.presets.score_names.len(),
        "Configuration resolved."
    );

    let mut manager = StudentManager::new(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut manager, stdin.lock(), stdout.lock(), theme).run()
}
