mod defaults;
mod file;

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use defaults::{CONFIG_FILE_NAME, DefaultsConfig};
use directories::ProjectDirs;
use file::{FileConfig, read_preset_seed};
use sims::core::presets::PresetKind;
use sims::core::presets::catalog::PresetSeed;
use sims::engine::config::{RegistryConfig, RegistryConfigBuilder};
use std::path::PathBuf;
use tracing::debug;

/// Resolves the registry configuration for a session.
///
/// Each value comes from, in order of precedence: a dedicated CLI flag, a `--set`
/// override, the configuration file, the built-in default. Presets from `--presets`
/// are appended after those of the configuration file.
pub fn build_config(args: &RunArgs) -> Result<RegistryConfig> {
    let config_path = args.config.clone().or_else(default_config_path);
    let file_config = match &config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;
    merge(args, file_config, &DefaultsConfig::default())
}

fn merge(args: &RunArgs, file_config: FileConfig, defaults: &DefaultsConfig) -> Result<RegistryConfig> {
    if args.capacity == Some(0) {
        return Err(CliError::Argument(
            "--capacity must be at least 1".to_string(),
        ));
    }
    let capacity = args
        .capacity
        .or(file_config.registry.and_then(|r| r.capacity))
        .unwrap_or(defaults.capacity);

    let mut presets = file_config.presets.unwrap_or_default();
    if let Some(path) = &args.presets {
        let seed = read_preset_seed(path)?;
        append_seed(&mut presets, seed);
    }

    RegistryConfigBuilder::new()
        .capacity(capacity)
        .presets(presets)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn append_seed(into: &mut PresetSeed, seed: PresetSeed) {
    into.departments.extend(seed.departments);
    into.majors.extend(seed.majors);
    into.score_names.extend(seed.score_names);
}

/// `config.toml` in the platform configuration directory, if that file exists.
fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "sims")?;
    let candidate = dirs.config_dir().join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!("Using default configuration file: {:?}", candidate);
        Some(candidate)
    } else {
        None
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "registry.capacity" => {
                config.registry.get_or_insert_with(Default::default).capacity =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                let kind = key
                    .strip_prefix("presets.")
                    .and_then(|k| k.parse::<PresetKind>().ok())
                    .ok_or_else(|| {
                        CliError::Config(format!(
                            "Unsupported configuration key for --set: '{}'",
                            key
                        ))
                    })?;
                *config
                    .presets
                    .get_or_insert_with(Default::default)
                    .names_mut(kind) = split_list(value_str);
            }
        }
    }
    Ok(config)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
