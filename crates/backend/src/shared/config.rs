use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Directory the config was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Static bundle of the dashboard UI, served as fallback
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

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/cleaned_data.csv"

[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
"#;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (production, the copy placed by build.rs)
/// 2. Current directory (development)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().ok();

    match find_config(&config_search_dirs(exe_dir, cwd))? {
        Some(config) => Ok(config),
        None => {
            tracing::info!("Using default embedded configuration");
            default_config()
        }
    }
}

/// Directories searched for `config.toml`, in priority order
fn config_search_dirs(exe_dir: Option<PathBuf>, cwd: Option<PathBuf>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = exe_dir.into_iter().collect();
    if let Some(cwd) = cwd {
        if !dirs.contains(&cwd) {
            dirs.push(cwd);
        }
    }
    dirs
}

/// First `config.toml` found in `dirs`
fn find_config(dirs: &[PathBuf]) -> anyhow::Result<Option<Config>> {
    for dir in dirs {
        if let Some(config) = load_config_from_dir(dir)? {
            return Ok(Some(config));
        }
        tracing::debug!("config.toml not found in: {}", dir.display());
    }
    Ok(None)
}

/// Read `config.toml` from `dir`, `Ok(None)` if the file does not exist
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Option<Config>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }

    tracing::info!("Loading config from: {}", config_path.display());
    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Cannot read {}", config_path.display()))?;
    let mut config: Config = toml::from_str(&contents)
        .with_context(|| format!("Invalid config file {}", config_path.display()))?;
    config.base_dir = dir.to_path_buf();
    Ok(Some(config))
}

fn default_config() -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    config.base_dir = std::env::current_dir().unwrap_or_default();
    Ok(config)
}

/// Get the dataset file path from configuration
pub fn get_dataset_path(config: &Config) -> PathBuf {
    resolve_path(&config.base_dir, &config.dataset.path)
}

/// Get the static UI directory from configuration
pub fn get_static_dir(config: &Config) -> PathBuf {
    resolve_path(&config.base_dir, &config.server.static_dir)
}

fn resolve_path(base_dir: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
