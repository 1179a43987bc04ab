use std::io;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Config {
    pub async fn load(path: &str) -> Result<Self> {
        let data = fs::read(path).await.wrap_err("Failed to read config")?;
        serde_yaml::from_slice(&data).wrap_err("Failed to parse config")
    }

    /// Loads the config, falling back to defaults when the file is absent.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::read(path).await {
            Ok(data) => serde_yaml::from_slice(&data).wrap_err("Failed to parse config"),

            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {path}, using defaults");
                Ok(Config::default())
            }

            Err(error) => Err(error).wrap_err("Failed to read config"),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_owned()
}

const fn default_port() -> u16 {
    8080
}
