mod schema;

pub use schema::{Config, DEFAULT_PREVIEW_ROWS};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/course-rater/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("course-rater"))
}

/// Get the default config file path (~/.config/course-rater/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is tried and built-in defaults are used when nothing is there.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
/// - `preview_rows` is 0
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                tracing::debug!("no config file found, using built-in weights");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    if config.preview_rows == Some(0) {
        anyhow::bail!("preview_rows in {} must be at least 1", path.display());
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
