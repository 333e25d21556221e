//! Application configuration, loaded from `config/{env}.yaml`.

use std::fs;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub server: ServerConfig,
    pub seed_demo: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            seed_demo: true,
        }
    }
}

impl AppConfig {
    /// Reads `config/{env}.yaml`, falling back to the defaults when the file
    /// is missing or malformed. Runs before tracing is initialized.
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        match fs::read_to_string(&config_path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse {}: {}, using defaults", config_path, e);
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Config file {} not found, using defaults", config_path);
                Self::default()
            }
        }
    }
}
