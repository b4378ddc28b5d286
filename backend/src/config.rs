//! Server configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. built-in defaults,
//! 2. the TOML file `inspection.toml` in the working directory (optional),
//! 3. environment variables prefixed with `INSPECTION_`
//!    (e.g. `INSPECTION_PORT=9000`, `INSPECTION_PUBLIC_BASE_URL=https://…`).

use common::link::remote_qr_url;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "inspection.toml";
const ENV_PREFIX: &str = "INSPECTION_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding inspections and templates.
    pub database_path: PathBuf,
    /// Origin used to build the public links encoded in QR codes.
    pub public_base_url: String,
    /// Remote service rendering QR images (`size` and `data` query parameters).
    pub qr_service_url: String,
    /// Side of the QR image in pixels.
    pub qr_size: u32,
    /// Optional PNG/JPEG drawn at the centre of composited QR codes.
    pub brand_mark_path: Option<PathBuf>,
    /// Open the default browser on start-up.
    pub open_browser: bool,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("inspections.sqlite"),
            public_base_url: "http://127.0.0.1:8080".to_string(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: 300,
            brand_mark_path: None,
            open_browser: false,
            json_limit: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(config_file: &Path) -> Result<Self, ConfigError> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".to_string()));
        }
        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "public_base_url must be an http(s) URL, got '{}'",
                self.public_base_url
            )));
        }
        if !(50..=1000).contains(&self.qr_size) {
            return Err(ConfigError::Invalid(format!(
                "qr_size must be between 50 and 1000 pixels, got {}",
                self.qr_size
            )));
        }
        remote_qr_url(&self.qr_service_url, &self.public_base_url, self.qr_size).map_err(|e| {
            ConfigError::Invalid(format!(
                "qr_service_url '{}' is not a valid URL: {}",
                self.qr_service_url, e
            ))
        })?;
        Ok(())
    }

    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "port = 9090\npublic_base_url = \"https://epi.example.org\"\nqr_size = 200"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.public_base_url, "https://epi.example.org");
        assert_eq!(config.qr_size, 200);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config::default();
        config.qr_size = 10;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.public_base_url = "epi.example.org".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.qr_service_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
