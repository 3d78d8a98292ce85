use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    pub stations: Vec<StationConfig>,
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Deserialize)]
pub struct StationConfig {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    pub from: u32,
    pub to: u32,
    pub time: u32,
    pub cost: u32,
    pub bidirectional: Option<bool>,
}

impl RouteConfig {
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional.unwrap_or(true)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config: {e}"))?;
        serde_yml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))
    }
}
