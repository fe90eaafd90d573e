use crate::cli::{PresetsArgs, PresetsCommands};
use crate::error::Result;
use crate::ui::{self, Theme};
use sims::core::presets::PresetKind;
use sims::core::presets::catalog::PresetCatalog;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: PresetsArgs, theme: Theme) -> Result<()> {
    match args.command {
        PresetsCommands::Check { path } => {
            let stdout = io::stdout();
            handle_check(&path, theme, &mut stdout.lock())
        }
    }
}

fn handle_check<W: Write>(path: &Path, theme: Theme, out: &mut W) -> Result<()> {
    info!("Validating preset file {:?}", path);
    let catalog = PresetCatalog::load(path)?;

    writeln!(out, "{}", ui::banner(&theme, &path.display().to_string()))?;
    for kind in PresetKind::ALL {
        writeln!(out, "{}", ui::render_presets(&theme, kind, catalog.get(kind).list()))?;
    }
    if !catalog.has_record_presets() {
        writeln!(
            out,
            "{}",
            theme.warning("Students cannot be added until departments and majors are configured.")
        )?;
    }
    writeln!(out, "{}", theme.success("✓ Preset file is valid."))?;
    Ok(())
}
