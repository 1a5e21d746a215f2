// Configuration file loading
//
// The game only ever reads its config file. Nothing is written back.

use super::types::Config;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the default path of the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("termpong");
    path.push("config.toml");
    path
}

/// Load configuration from `explicit` or the default location.
///
/// A missing default file means defaults. A missing explicit file is an
/// error. A file that does not parse falls back to defaults with a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => get_config_path(),
    };

    let config = if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        parse_config(&contents)
    } else {
        info!(path = %config_path.display(), "no config file, using defaults");
        Config::default()
    };

    config
        .validate()
        .with_context(|| format!("invalid configuration in {}", config_path.display()))?;
    Ok(config)
}

/// Parse config text, falling back to defaults when it is malformed
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to parse config file");
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
    }
}

/// Render the default configuration with helpful comments
pub fn default_config_toml() -> Result<String> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    Ok(format!(
        "# termpong configuration file\n\
         # Save as {} to customize the game\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\"\n\
         #                     or single characters like \"W\", \"S\", \"1\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # AI damping: fraction of CPU paddle velocity kept per tick, in (0, 1]\n\n\
         {}",
        get_config_path().display(),
        toml_string
    ))
}
