//! Configuration management (TOML)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub target: TargetConfig,
    pub sampling: SamplingConfig,
    pub browser: BrowserLaunchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub url: String,
    pub settle_delay_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub iterations: u32,
    pub window_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserLaunchConfig {
    pub headless: bool,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: TargetConfig {
                url: "http://localhost:5173".to_string(),
                settle_delay_seconds: 3,
            },
            sampling: SamplingConfig {
                iterations: 60,
                window_ms: 1000,
            },
            browser: BrowserLaunchConfig {
                headless: true,
                args: vec![
                    "--disable-web-security".to_string(),
                    "--disable-features=VizDisplayCompositor".to_string(),
                ],
            },
            output: OutputConfig {
                path: PathBuf::from("/workspace/results/fps.json"),
            },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "frameprobe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
