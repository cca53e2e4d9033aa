//! Configuration loading and root folder resolution
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument or its environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the data root folder
pub const ROOT_FOLDER_ENV: &str = "WARDROBE_ROOT_FOLDER";
/// Database file created inside the root folder
pub const DATABASE_FILE: &str = "wardrobe.db";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_USER_ID: i64 = 1;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Allowed CORS origins; `*` or an empty list allows any origin
    pub cors_origins: Vec<String>,
    /// Tracing filter directive, e.g. `info` or `wardrobe_api=debug`
    pub log_level: Option<String>,
    /// User assumed when a request carries no user header
    pub default_user_id: Option<i64>,
}

impl TomlConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }
}

/// Load the TOML configuration.
///
/// An explicitly named file must exist and parse. Without one, the platform
/// config file is read if present; otherwise defaults are returned.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        info!("Loaded config file: {}", path.display());
        return TomlConfig::parse(&content);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)?;
            info!("Loaded config file: {}", path.display());
            TomlConfig::parse(&content)
        }
        _ => {
            warn!("No config file found, using defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// `<config dir>/wardrobe/config.toml` for the current platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wardrobe").join("config.toml"))
}

/// Resolve the data root folder: CLI, then environment, then TOML, then
/// the OS default.
pub fn resolve_root_folder(cli_arg: Option<&Path>, env_var_name: &str, toml: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &toml.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// OS-dependent default root folder
pub fn default_root_folder() -> PathBuf {
    // ~/.local/share/wardrobe, ~/Library/Application Support/wardrobe, %LOCALAPPDATA%\wardrobe
    dirs::data_local_dir()
        .map(|d| d.join("wardrobe"))
        .unwrap_or_else(|| PathBuf::from("./wardrobe_data"))
}

pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join(DATABASE_FILE)
}

/// Fully resolved service settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub root_folder: PathBuf,
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: Option<String>,
    pub default_user_id: i64,
}

impl ServerConfig {
    /// Merge command-line values over the TOML file over compiled defaults
    pub fn resolve(
        cli_root: Option<&Path>,
        cli_host: Option<&str>,
        cli_port: Option<u16>,
        toml: TomlConfig,
    ) -> Self {
        let root_folder = resolve_root_folder(cli_root, ROOT_FOLDER_ENV, &toml);
        let db_path = database_path(&root_folder);

        Self {
            root_folder,
            db_path,
            host: cli_host
                .map(str::to_string)
                .or(toml.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli_port.or(toml.port).unwrap_or(DEFAULT_PORT),
            cors_origins: toml.cors_origins,
            log_level: toml.log_level,
            default_user_id: toml.default_user_id.unwrap_or(DEFAULT_USER_ID),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
