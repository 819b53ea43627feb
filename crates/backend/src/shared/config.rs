use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `[data] path`
pub const DATA_PATH_ENV: &str = "INSURANCE_DATA_PATH";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub path: String,
    /// Worksheet to read; the first sheet when absent
    #[serde(default)]
    pub sheet: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub currency: String,
    pub sidebar_caption: String,
    /// Image shown above the sidebar caption, relative to `static_dir`
    pub logo: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Insurance Descriptive Analytics".to_string(),
            currency: "TZS".to_string(),
            sidebar_caption: "Online Analytics".to_string(),
            logo: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
path = "python_query.xlsx"

[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[dashboard]
title = "Insurance Descriptive Analytics"
currency = "TZS"
sidebar_caption = "Online Analytics"
# logo = "logo1.png"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `INSURANCE_DATA_PATH` replaces the data path in either case.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            parse_config(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    if let Ok(path) = std::env::var(DATA_PATH_ENV) {
        if !path.trim().is_empty() {
            tracing::info!("{} overrides data path: {}", DATA_PATH_ENV, path);
            config.data.path = path;
        }
    }

    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

/// Get the spreadsheet path from configuration
///
/// Relative paths are tried next to the executable first, then against the
/// current directory.
pub fn get_data_path(config: &Config) -> PathBuf {
    let data_path = Path::new(&config.data.path);

    if data_path.is_absolute() {
        return data_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(data_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(&config.data.path)
}
