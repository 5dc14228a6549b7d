//! Config command - read and change settings

use crate::{
    GalrError,
    cli::ConfigCommands,
    config::{CONFIG_KEYS, GalrConfig},
};

type Result<T> = std::result::Result<T, GalrError>;

/// Execute the config command
///
/// # Errors
/// Returns an error for malformed settings, unknown keys, or if saving fails
pub fn execute(mut config: GalrConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                GalrError::InvalidInput("Invalid format. Use: galr config set key=value".into())
            })?;
            let key = key.trim();

            config.set(key, value).map_err(|e| unknown_key(key, e))?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).map_err(|e| unknown_key(key, e))?;
            println!("{value}");
        }
        ConfigCommands::Path => {
            println!("{}", GalrConfig::config_path()?.display());
        }
    }
    Ok(())
}

fn unknown_key(key: &str, err: ::config::ConfigError) -> GalrError {
    match err {
        ::config::ConfigError::NotFound(_) => GalrError::InvalidInput(format!(
            "Unknown configuration key: '{key}'. Available keys: {}",
            CONFIG_KEYS.join(", ")
        )),
        other => other.into(),
    }
}
