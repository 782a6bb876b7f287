use std::env;
use std::fmt;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable \"{0}\" not set")]
    Missing(&'static str),

    #[error("Invalid value for \"{var}\": {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub web3_provider_url: String,
    pub database_url: String,
    pub pinata_api_key: String,
    pub pinata_api_secret: String,
    pub pinata_api_url: String,
    pub pinata_gateway: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            web3_provider_url: required("WEB3_PROVIDER_URL")?,
            database_url: required("DATABASE_URL")?,
            pinata_api_key: required("PINATA_API_KEY")?,
            pinata_api_secret: required("PINATA_API_SECRET")?,
            pinata_api_url: lookup("PINATA_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PINATA_API_URL.to_string()),
            pinata_gateway: required("PINATA_GATEWAY")?,
            port,
        })
    }
}

// Credentials and the connection string stay out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("web3_provider_url", &self.web3_provider_url)
            .field("database_url", &"<redacted>")
            .field("pinata_api_key", &"<redacted>")
            .field("pinata_api_secret", &"<redacted>")
            .field("pinata_api_url", &self.pinata_api_url)
            .field("pinata_gateway", &self.pinata_gateway)
            .field("port", &self.port)
            .finish()
    }
}
