//! Configuration for the template browser
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/promptdeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::catalog::ResourceDescriptor;
use serde::Deserialize;
use std::path::PathBuf;

mod serialization;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL: a local static file server
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the resource identifiers are resolved against
    pub base_url: String,

    /// Theme name: "Deck Dark", "Deck Light", "Terminal ANSI"
    pub theme: String,

    /// Optional replacement for the built-in resource list
    pub resources: Option<Vec<ResourceDescriptor>>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: "Deck Dark".to_string(),
            resources: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is unset
    pub level: String,

    /// Whether to also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "promptdeck.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (everything optional; absent keys keep defaults)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub base_url: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [[resources]] entries replacing the built-in catalog
    pub resources: Option<Vec<ResourceDescriptor>>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/promptdeck/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("promptdeck").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write the template (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists.
    ///
    /// A config file that exists but cannot be parsed fails fast with an
    /// actionable message rather than silently running on defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}:", path.display());
                    eprintln!("  {e}");
                    eprintln!("Fix the file or delete it to regenerate defaults.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read config file {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_parts(file, |key| std::env::var(key).ok())
    }

    /// Assemble a Config from a parsed file and an env lookup.
    /// Split out so tests can inject both sides.
    pub(crate) fn from_parts(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let defaults = Self::default();

        let base_url = env("PROMPTDECK_BASE_URL")
            .or(file.base_url)
            .unwrap_or(defaults.base_url);

        let theme = env("PROMPTDECK_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = {
            let d = LoggingConfig::default();
            let f = file.logging.unwrap_or_default();
            LoggingConfig {
                level: f.level.unwrap_or(d.level),
                file_enabled: f.file_enabled.unwrap_or(d.file_enabled),
                file_dir: f.file_dir.map(PathBuf::from).unwrap_or(d.file_dir),
                file_prefix: f.file_prefix.unwrap_or(d.file_prefix),
                file_rotation: f.file_rotation.unwrap_or(d.file_rotation),
            }
        };

        Self {
            base_url,
            theme,
            resources: file.resources,
            logging,
        }
    }
}
