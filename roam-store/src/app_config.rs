use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Marker in `backend.package_path` replaced by the package identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Where package documents are fetched from.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    /// Path template, optionally with a query. Must contain `{id}`.
    #[serde(default = "default_package_path")]
    pub package_path: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PresentationConfig {
    pub placeholder_image: Option<String>,
    pub currency_marker: Option<String>,
}

fn default_package_path() -> String {
    "/api/v1/Iternaries/get/{id}".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl BackendConfig {
    /// Reject templates that would send every identifier to the same URL.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !self.package_path.contains(ID_PLACEHOLDER) {
            return Err(config::ConfigError::Message(format!(
                "backend.package_path must contain {}: {:?}",
                ID_PLACEHOLDER, self.package_path
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `ROAM_BACKEND__BASE_URL=http://api:7000`
            .add_source(config::Environment::with_prefix("ROAM").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Parse a single TOML document, without file or environment layers.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.backend.validate()?;
        Ok(config)
    }
}
