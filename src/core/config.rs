//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.listkeep/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListkeepConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Store file path. Relative paths are resolved against `~/.listkeep/`.
    pub path: Option<String>,
    /// Slot the list is persisted under.
    pub key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STORE_KEY: &str = "items";
pub const DEFAULT_STORE_FILE: &str = "store.json";
pub const DEFAULT_LOG_FILE: &str = "listkeep.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub store_path: PathBuf,
    pub store_key: String,
    pub ephemeral: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub store_path: Option<String>,
    pub store_key: Option<String>,
    pub ephemeral: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.listkeep/`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".listkeep"))
}

/// Returns the path to `~/.listkeep/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.listkeep/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ListkeepConfig::default()`.
pub fn load_config() -> Result<ListkeepConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(ListkeepConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ListkeepConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<ListkeepConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ListkeepConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# listkeep configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [storage]
# path = "store.json"        # Relative to ~/.listkeep/ (or LISTKEEP_STORE_PATH)
# key = "items"              # Slot the list is saved under (or LISTKEEP_KEY)

# [logging]
# level = "info"             # "off", "error", "warn", "info", "debug", "trace"
# file = "listkeep.log"      # Relative to the working directory
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ListkeepConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Store path: CLI → env → config → default
    let store_path = cli
        .store_path
        .clone()
        .or_else(|| std::env::var("LISTKEEP_STORE_PATH").ok())
        .or_else(|| config.storage.path.clone())
        .map(|p| resolve_store_path(&p))
        .unwrap_or_else(default_store_path);

    let store_key = pick_store_key(
        cli.store_key.clone(),
        std::env::var("LISTKEEP_KEY").ok(),
        config.storage.key.clone(),
    );

    // Log level: env → config → default
    let log_level = std::env::var("LISTKEEP_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        store_path,
        store_key,
        ephemeral: cli.ephemeral,
        log_level,
        log_file,
    }
}

/// Key: CLI → env → config → default. A blank winner falls back to the default.
fn pick_store_key(cli: Option<String>, env: Option<String>, file: Option<String>) -> String {
    cli.or(env)
        .or(file)
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_KEY.to_string())
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().parse::<LevelFilter>() {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
            None
        }
    }
}

fn default_store_path() -> PathBuf {
    app_dir()
        .map(|d| d.join(DEFAULT_STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

/// Absolute paths are kept; relative ones live under `~/.listkeep/`.
fn resolve_store_path(path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        return candidate;
    }
    match app_dir() {
        Some(dir) => dir.join(candidate),
        None => candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ListkeepConfig::default();
        assert!(config.storage.path.is_none());
        assert!(config.storage.key.is_none());
    }

    #[test]
    fn test_store_key_precedence() {
        let some = |k: &str| Some(k.to_string());
        assert_eq!(pick_store_key(some("cli"), some("env"), some("file")), "cli");
        assert_eq!(pick_store_key(None, some("env"), some("file")), "env");
        assert_eq!(pick_store_key(None, None, some("groceries")), "groceries");
        assert_eq!(pick_store_key(None, None, None), DEFAULT_STORE_KEY);
    }

    #[test]
    fn test_blank_store_key_falls_back_to_default() {
        let some = |k: &str| Some(k.to_string());
        assert_eq!(pick_store_key(some("   "), None, None), DEFAULT_STORE_KEY);
        // A blank CLI key still shadows lower layers
        assert_eq!(pick_store_key(some(""), some("env"), None), DEFAULT_STORE_KEY);
    }

    #[test]
    fn test_resolve_key_from_cli_only() {
        let cli = CliOverrides {
            store_path: Some("/tmp/groceries.json".to_string()),
            store_key: Some("groceries".to_string()),
            ephemeral: false,
        };
        let resolved = resolve(&ListkeepConfig::default(), &cli);
        assert_eq!(resolved.store_key, "groceries");
        assert_eq!(resolved.store_path, PathBuf::from("/tmp/groceries.json"));
        assert!(!resolved.ephemeral);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ListkeepConfig {
            storage: StorageConfig {
                path: Some("from-file.json".to_string()),
                key: Some("from-file".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            store_path: Some("/tmp/cli-store.json".to_string()),
            store_key: Some("cli".to_string()),
            ephemeral: true,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.store_path, PathBuf::from("/tmp/cli-store.json"));
        assert_eq!(resolved.store_key, "cli");
        assert!(resolved.ephemeral);
    }

    #[test]
    fn test_relative_store_path_lives_under_app_dir() {
        let resolved = resolve_store_path("lists/shopping.json");
        if let Some(dir) = app_dir() {
            assert_eq!(resolved, dir.join("lists/shopping.json"));
        }
        assert_eq!(resolve_store_path("/abs/store.json"), PathBuf::from("/abs/store.json"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("chatty"), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[storage]
path = "/data/list.json"
key = "shopping"

[logging]
level = "debug"
file = "/tmp/listkeep.log"
"#;
        let config: ListkeepConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.path.as_deref(), Some("/data/list.json"));
        assert_eq!(config.storage.key.as_deref(), Some("shopping"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/listkeep.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[storage]
key = "todo"
"#;
        let config: ListkeepConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.key.as_deref(), Some("todo"));
        assert!(config.storage.path.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage\nkey = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
