use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory (relative to the working directory) holding `config.toml`.
pub const CONFIG_DIR: &str = ".vrname";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory scanned for source videos
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory the renamed copies are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Player used when none is given on the command line
    #[serde(default)]
    pub player: Option<String>,

    /// Default preview format: "table", "summary", "json" or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            player: None,
            preview_format: default_preview(),
            use_color: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Convention declaration file replacing the built-in catalog
    #[serde(default)]
    pub conventions_file: Option<PathBuf>,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("raw")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("fixed_metadata")
}

fn default_preview() -> String {
    "table".to_string()
}

impl Config {
    /// Load config from .vrname/config.toml in `working_dir` if it exists
    pub fn load(working_dir: &Path) -> Result<Self> {
        let config_path = working_dir.join(CONFIG_DIR).join("config.toml");
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path, creating its directory
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve a configured path against the working directory
    pub fn resolve(working_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            working_dir.join(path)
        }
    }
}
