use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub static DEFAULT_MONGODB_DATABASE: &str = "car_rental_tickets";
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub mongodb_url: String,
    pub mongodb_database: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            mongodb_url: required("MONGODB_URL")?,
            mongodb_database: var("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_MONGODB_DATABASE.to_string()),
            bind_address,
        })
    }
}
