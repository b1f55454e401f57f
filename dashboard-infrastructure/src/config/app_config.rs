use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use dashboard_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub dataset_path: String,
    pub map_zoom: u32,
    pub default_center_lat: f64,
    pub default_center_lon: f64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3345".to_string(),
            dataset_path: "./LockerNYC_Reservations.csv".to_string(),
            map_zoom: 11,
            default_center_lat: 40.73,
            default_center_lon: -73.98,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("LOCKERDASH_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.dataset_path = resolve_path(base, &self.dataset_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.dataset_path.trim().is_empty() {
            return Err(anyhow!("dataset_path must not be empty"));
        }
        if !(1..=20).contains(&self.map_zoom) {
            return Err(anyhow!("map_zoom out of range (1-20)"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            dataset_path: self.dataset_path.clone(),
            map_zoom: self.map_zoom,
            default_center_lat: self.default_center_lat,
            default_center_lon: self.default_center_lon,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("LOCKERDASH_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("LOCKERDASH_DATASET_PATH") {
            self.dataset_path = value;
        }
        if let Ok(value) = env::var("LOCKERDASH_MAP_ZOOM") {
            self.map_zoom = value.parse().unwrap_or(self.map_zoom);
        }
        if let Ok(value) = env::var("LOCKERDASH_DEFAULT_CENTER_LAT") {
            self.default_center_lat = value.parse().unwrap_or(self.default_center_lat);
        }
        if let Ok(value) = env::var("LOCKERDASH_DEFAULT_CENTER_LON") {
            self.default_center_lon = value.parse().unwrap_or(self.default_center_lon);
        }
        if let Ok(value) = env::var("LOCKERDASH_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("LOCKERDASH_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        AppConfig::default().validate().expect("defaults are valid");
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zoom_must_stay_in_range() {
        let config = AppConfig {
            map_zoom: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = AppConfig {
            map_zoom: 21,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_dataset_path_resolves_against_the_config_dir() {
        assert_eq!(
            resolve_path(Path::new("/etc/lockerdash"), "./lockers.csv"),
            "/etc/lockerdash/./lockers.csv"
        );
        assert_eq!(resolve_path(Path::new("/etc"), "/data/lockers.csv"), "/data/lockers.csv");
    }

    #[test]
    fn toml_fields_override_defaults() {
        let config: AppConfig =
            toml::from_str("bind_addr = \"0.0.0.0:8080\"\nmap_zoom = 12\n").expect("parse toml");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.map_zoom, 12);
        assert_eq!(config.dataset_path, "./LockerNYC_Reservations.csv");
    }
}
