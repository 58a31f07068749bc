use std::error::Error;
use std::time::Duration;
use std::{env, fs};

use athome_api::models::Location;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// Connection settings for the automation hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    pub host: String,
    pub port: u16,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Hub {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub hub: Hub,
    pub location: Location,
}

impl Settings {
    /// Loads settings from the TOML file named by `ATHOME_CONFIG`, falling
    /// back to the bundled default configuration.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings = match env::var("ATHOME_CONFIG") {
            Ok(path) => toml::from_str(&fs::read_to_string(path)?)?,
            Err(_) => toml::from_str(include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/configs/default.toml"
            )))?,
        };

        Ok(settings)
    }
}
