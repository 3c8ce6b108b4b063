use crate::map::MapConfig;

use hyper::Uri;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_endpoint", with = "http_serde::uri")]
    pub endpoint: Uri,
    #[serde(default = "Config::default_log_level")]
    pub log_level: log::Level,
    /// Present iff the page gets a map view.
    #[serde(default)]
    pub map: Option<MapConfig>,
}

impl Config {
    fn default_endpoint() -> Uri {
        // The location service's local dev address
        Uri::from_static("http://127.0.0.1:8787")
    }

    fn default_log_level() -> log::Level {
        log::Level::Info
    }
}

pub fn parse_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let toml_string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml_string)?;
    Ok(config)
}
