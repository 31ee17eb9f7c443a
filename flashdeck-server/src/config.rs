//! Configuration management for flashdeck-server
//!
//! Two sources feed the resolved [`Config`]:
//! 1. Command-line arguments (clap, with environment variable fallbacks)
//! 2. Optional TOML file for settings that rarely change
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (--port, --storage-dir)
//! 2. Environment variables (FLASHDECK_PORT, FLASHDECK_STORAGE_DIR)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)
//!
//! A missing or unparseable TOML file is logged and ignored; startup
//! never fails on configuration alone.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};

/// Default HTTP server port
pub const DEFAULT_PORT: u16 = 5275;

/// Command-line arguments for flashdeck-server
#[derive(Parser, Debug)]
#[command(name = "flashdeck-server")]
#[command(about = "Flashcard web service with one-file-per-card storage")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "FLASHDECK_PORT")]
    pub port: Option<u16>,

    /// Directory holding flashcard record files
    #[arg(short, long, env = "FLASHDECK_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, env = "FLASHDECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Bootstrap configuration loaded from TOML file
///
/// These settings cannot change during runtime. Application must restart
/// to pick up changes to the TOML file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Directory holding flashcard record files
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,

    /// Directory holding flashcard record files
    pub storage_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from arguments, environment and TOML file
    ///
    /// clap has already folded environment variables into `args`, so the
    /// priority here is args > TOML > built-in defaults. Never fails:
    /// configuration problems degrade to defaults with a warning.
    pub fn resolve(args: &Args) -> Self {
        let toml_config = load_toml_config(args.config.as_deref());

        let port = args.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);

        let storage_dir = args
            .storage_dir
            .clone()
            .or(toml_config.storage_dir)
            .unwrap_or_else(default_storage_dir);

        Config { port, storage_dir }
    }
}

/// Load the TOML config file, if one can be found and parsed
fn load_toml_config(explicit_path: Option<&Path>) -> TomlConfig {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return TomlConfig::default(),
        },
    };

    if !path.exists() {
        // Only an explicitly requested file is worth a warning
        if explicit_path.is_some() {
            warn!("Config file not found: {}, using defaults", path.display());
        }
        return TomlConfig::default();
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return TomlConfig::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => {
            info!("Loaded TOML configuration from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to parse config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Default configuration file path for the platform
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("flashdeck").join("flashdeck.toml"))
}

/// OS-dependent default storage directory
fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("flashdeck").join("cards"))
        .unwrap_or_else(|| PathBuf::from("flashcards"))
}
